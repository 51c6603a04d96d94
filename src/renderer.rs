// Canvas 2d implementation of `Surface`. Wraps the context of the background
// canvas found on the DOM and translates line/disc calls into path commands.

use crate::color::Color;
use crate::surface::Surface;
use std::f64::consts::PI;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
extern crate nalgebra_glm as glm;
use glm::DVec2;

pub struct CanvasSurface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the 2d context from the canvas. A canvas that can't provide one
    // yields `Ok(None)`; only a throwing `getContext` is an error.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Option<Self>, JsValue> {
        let context = match canvas.get_context("2d")? {
            Some(object) => object.dyn_into::<CanvasRenderingContext2d>()?,
            None => return Ok(None),
        };
        Ok(Some(CanvasSurface { canvas, context }))
    }

    // Sets the canvas backing store to the given size, in whole pixels
    pub fn set_size(&self, width: f64, height: f64) {
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
    }
}

impl Surface for CanvasSurface {
    type Error = JsValue;

    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.context.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn line(
        &mut self,
        from: DVec2,
        to: DVec2,
        width: f64,
        color: Color,
        alpha: f64,
    ) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.move_to(from.x, from.y);
        self.context.line_to(to.x, to.y);
        self.context.set_stroke_style_str(&color.to_css(alpha));
        self.context.set_line_width(width);
        self.context.stroke();
        Ok(())
    }

    fn disc(&mut self, center: DVec2, radius: f64, color: Color, alpha: f64) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context.arc(center.x, center.y, radius, 0.0, PI * 2.0)?;
        self.context.set_fill_style_str(&color.to_css(alpha));
        self.context.fill();
        Ok(())
    }
}
