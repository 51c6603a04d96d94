// Frame loop for the background canvas. Owns the particle field, keeps it
// sized to the window and redraws it on every animation frame until stopped.

use crate::config::FieldConfig;
use crate::dom::EventListener;
use crate::field::ParticleField;
use crate::renderer::CanvasSurface;
use crate::surface::Surface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, Window};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct Scene {
    field: ParticleField,
    surface: CanvasSurface,
}

#[wasm_bindgen]
pub struct Background {
    window: Window,
    scene: Rc<RefCell<Scene>>,
    frame: FrameCallback,
    frame_id: Rc<Cell<Option<i32>>>,
    on_resize: Option<EventListener>,
}

#[wasm_bindgen]
impl Background {
    /// Starts the animated background on the canvas with id `canvas_id`.
    /// Returns `None`, leaving the page untouched, when there is no such
    /// canvas or it has no 2d context.
    pub fn start(canvas_id: &str) -> Result<Option<Background>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let canvas = window
            .document()
            .and_then(|document| document.get_element_by_id(canvas_id))
            .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok());
        let canvas = match canvas {
            Some(canvas) => canvas,
            None => {
                log::debug!("no canvas #{}, background disabled", canvas_id);
                return Ok(None);
            }
        };
        let surface = match CanvasSurface::new(canvas)? {
            Some(surface) => surface,
            None => {
                log::debug!("canvas #{} has no 2d context, background disabled", canvas_id);
                return Ok(None);
            }
        };

        let field = ParticleField::new(FieldConfig::default());
        Background::run(window, field, surface).map(Some)
    }

    /// Cancels the pending frame and detaches the resize listener. Safe to
    /// call more than once; dropping the handle does the same.
    pub fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(err) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", err);
            }
        }
        let was_running = self.frame.borrow_mut().take().is_some();
        self.on_resize.take();
        if was_running {
            log::info!("background stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.frame.borrow().is_some()
    }

    pub fn particle_count(&self) -> usize {
        self.scene.borrow().field.particles().len()
    }
}

impl Background {
    fn run(window: Window, field: ParticleField, surface: CanvasSurface) -> Result<Background, JsValue> {
        let scene = Rc::new(RefCell::new(Scene { field, surface }));
        fit_to_window(&window, &scene)?;

        let on_resize = {
            let resize_window = window.clone();
            let scene = scene.clone();
            EventListener::new(&window, "resize", true, move |_| {
                if let Err(err) = fit_to_window(&resize_window, &scene) {
                    log::warn!("resize failed: {:?}", err);
                }
            })?
        };

        let frame: FrameCallback = Rc::new(RefCell::new(None));
        let frame_id = Rc::new(Cell::new(None));
        {
            let window = window.clone();
            let scene = scene.clone();
            let frame_handle = frame.clone();
            let frame_id = frame_id.clone();
            *frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                frame_id.set(None);
                {
                    let mut scene = scene.borrow_mut();
                    let Scene { field, surface } = &mut *scene;
                    if let Err(err) = field.tick(surface) {
                        log::warn!("failed to draw frame: {:?}", err);
                    }
                }
                if let Err(err) = request_frame(&window, &frame_handle, &frame_id) {
                    log::warn!("failed to schedule frame: {:?}", err);
                }
            }) as Box<dyn FnMut()>));
        }
        request_frame(&window, &frame, &frame_id)?;

        log::info!(
            "background started with {} particles",
            scene.borrow().field.particles().len()
        );
        Ok(Background {
            window,
            scene,
            frame,
            frame_id,
            on_resize: Some(on_resize),
        })
    }
}

impl Drop for Background {
    fn drop(&mut self) {
        self.stop();
    }
}

// Matches the canvas to the viewport and regenerates the particles for it
fn fit_to_window(window: &Window, scene: &RefCell<Scene>) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    let mut scene = scene.borrow_mut();
    scene.surface.set_size(width, height);
    let (width, height) = scene.surface.size();
    scene.field.resize(width, height);
    Ok(())
}

fn request_frame(window: &Window, frame: &FrameCallback, frame_id: &Cell<Option<i32>>) -> Result<(), JsValue> {
    if let Some(callback) = frame.borrow().as_ref() {
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        frame_id.set(Some(id));
    }
    Ok(())
}
