// Soft glow that follows the mouse pointer.

use crate::dom::{window_and_document, EventListener};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

/// CSS pixel length for a pointer coordinate.
pub fn px(value: i32) -> String {
    format!("{}px", value)
}

#[wasm_bindgen]
pub struct CursorGlow {
    on_move: Option<EventListener>,
}

#[wasm_bindgen]
impl CursorGlow {
    /// Moves the element `glow_id` to the pointer on every `mousemove`.
    pub fn start(glow_id: &str) -> Result<Option<CursorGlow>, JsValue> {
        let (_, document) = match window_and_document() {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let glow = document
            .get_element_by_id(glow_id)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let glow = match glow {
            Some(glow) => glow,
            None => {
                log::debug!("no #{}, cursor glow disabled", glow_id);
                return Ok(None);
            }
        };
        let on_move = EventListener::new(&document, "mousemove", true, move |event| {
            let event = match event.dyn_ref::<MouseEvent>() {
                Some(event) => event,
                None => return,
            };
            let style = glow.style();
            let moved = style
                .set_property("left", &px(event.client_x()))
                .and_then(|_| style.set_property("top", &px(event.client_y())));
            if let Err(err) = moved {
                log::warn!("failed to move cursor glow: {:?}", err);
            }
        })?;
        Ok(Some(CursorGlow {
            on_move: Some(on_move),
        }))
    }

    pub fn stop(&mut self) {
        self.on_move.take();
    }

    pub fn is_running(&self) -> bool {
        self.on_move.is_some()
    }
}
