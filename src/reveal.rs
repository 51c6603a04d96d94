// One-shot effects for elements scrolling into view: fade-ins for
// `[data-aos]` blocks and the fill of the skill bars.

use crate::dom::{observe_once, Observer};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const REVEAL_SELECTOR: &str = "[data-aos]";
const REVEALED_CLASS: &str = "aosIn";
const REVEAL_MARGIN: &str = "0px 0px -30px 0px";
const REVEAL_THRESHOLD: f64 = 0.1;

const BAR_SELECTOR: &str = ".sb-fill, .soft-fill";
const BAR_THRESHOLD: f64 = 0.5;

/// CSS width for a skill bar from its `data-w` attribute. A missing or empty
/// attribute gives `0%`; anything else is used as-is.
#[wasm_bindgen]
pub fn bar_width(data_w: Option<String>) -> String {
    match data_w.as_deref() {
        None | Some("") => "0%".to_owned(),
        Some(width) => format!("{}%", width),
    }
}

/// Adds `aosIn` to each `[data-aos]` element the first time it shows.
#[wasm_bindgen]
pub struct RevealOnScroll {
    observer: Option<Observer>,
}

#[wasm_bindgen]
impl RevealOnScroll {
    pub fn start() -> Result<Option<RevealOnScroll>, JsValue> {
        let observer = observe_once(REVEAL_SELECTOR, REVEAL_MARGIN, REVEAL_THRESHOLD, |element| {
            if let Err(err) = element.class_list().add_1(REVEALED_CLASS) {
                log::warn!("failed to reveal element: {:?}", err);
            }
        })?;
        Ok(observer.map(|observer| RevealOnScroll {
            observer: Some(observer),
        }))
    }

    pub fn stop(&mut self) {
        self.observer.take();
    }

    pub fn is_running(&self) -> bool {
        self.observer.is_some()
    }
}

/// Grows each skill bar to its `data-w` percentage once half of it is on
/// screen.
#[wasm_bindgen]
pub struct SkillBars {
    observer: Option<Observer>,
}

#[wasm_bindgen]
impl SkillBars {
    pub fn start() -> Result<Option<SkillBars>, JsValue> {
        let observer = observe_once(BAR_SELECTOR, "0px", BAR_THRESHOLD, |element| {
            let bar = match element.dyn_ref::<HtmlElement>() {
                Some(bar) => bar,
                None => return,
            };
            let width = bar_width(bar.get_attribute("data-w"));
            if let Err(err) = bar.style().set_property("width", &width) {
                log::warn!("failed to fill skill bar: {:?}", err);
            }
        })?;
        Ok(observer.map(|observer| SkillBars {
            observer: Some(observer),
        }))
    }

    pub fn stop(&mut self) {
        self.observer.take();
    }

    pub fn is_running(&self) -> bool {
        self.observer.is_some()
    }
}
