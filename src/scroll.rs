// Scroll offsets at which the header and the scroll-to-top button change
// state, and the listeners that apply them.

use crate::dom::{window_and_document, EventListener};
use wasm_bindgen::prelude::*;
use web_sys::{Element, ScrollBehavior, ScrollToOptions, Window};

pub const HEADER_SCROLLED_AFTER: f64 = 30.0;
pub const SCROLL_TOP_VISIBLE_AFTER: f64 = 500.0;

/// Whether the sticky header should carry its `scrolled` class.
#[wasm_bindgen]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_AFTER
}

/// Whether the scroll-to-top button should be visible.
#[wasm_bindgen]
pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_VISIBLE_AFTER
}

fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

// Adds `class` to `element` while `when(scrollY)` holds
fn toggle_on_scroll(
    window: &Window,
    element: Element,
    class: &'static str,
    when: fn(f64) -> bool,
) -> Result<EventListener, JsValue> {
    let scroll_window = window.clone();
    EventListener::new(window, "scroll", true, move |_| {
        let on = when(scroll_y(&scroll_window));
        if let Err(err) = element.class_list().toggle_with_force(class, on) {
            log::warn!("failed to toggle {}: {:?}", class, err);
        }
    })
}

/// Sticky header and scroll-to-top button. Either element may be absent;
/// with neither present `start` returns `None`.
#[wasm_bindgen]
pub struct ScrollEffects {
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl ScrollEffects {
    pub fn start(header_id: &str, button_id: &str) -> Result<Option<ScrollEffects>, JsValue> {
        let (window, document) = match window_and_document() {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let mut listeners = Vec::new();

        if let Some(header) = document.get_element_by_id(header_id) {
            listeners.push(toggle_on_scroll(&window, header, "scrolled", header_scrolled)?);
        }
        if let Some(button) = document.get_element_by_id(button_id) {
            listeners.push(toggle_on_scroll(&window, button.clone(), "vis", scroll_top_visible)?);
            let click_window = window.clone();
            listeners.push(EventListener::new(&button, "click", false, move |_| {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                click_window.scroll_to_with_scroll_to_options(&options);
            })?);
        }

        if listeners.is_empty() {
            log::debug!("no #{} or #{}, scroll effects disabled", header_id, button_id);
            return Ok(None);
        }
        Ok(Some(ScrollEffects { listeners }))
    }

    /// Detaches every listener. Dropping the handle does the same.
    pub fn stop(&mut self) {
        self.listeners.clear();
    }

    pub fn is_running(&self) -> bool {
        !self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0));
        assert!(!header_scrolled(30.0));
        assert!(header_scrolled(30.5));
    }

    #[test]
    fn scroll_top_threshold_is_exclusive() {
        assert!(!scroll_top_visible(500.0));
        assert!(scroll_top_visible(501.0));
        assert!(!scroll_top_visible(f64::NAN));
    }
}
