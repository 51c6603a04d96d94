// Navigation: the burger menu on narrow screens and the link of the section
// currently in the middle of the viewport.

use crate::dom::{query_all, window_and_document, EventListener, Observer};
use wasm_bindgen::prelude::*;
use web_sys::Element;

const ACTIVE_CLASS: &str = "active";
const OPEN_CLASS: &str = "open";
const SECTION_SELECTOR: &str = "section[id]";
const LINK_SELECTOR: &str = ".nav-link";
// Only the band between 42% and 48% of the viewport height counts
const ACTIVE_BAND: &str = "-42% 0px -52% 0px";

/// Whether a nav link with this `href` points at the section `section_id`.
#[wasm_bindgen]
pub fn is_active_link(href: Option<String>, section_id: &str) -> bool {
    links_to(href.as_deref(), section_id)
}

fn links_to(href: Option<&str>, section_id: &str) -> bool {
    match href.and_then(|href| href.strip_prefix('#')) {
        Some(target) => target == section_id,
        None => false,
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(err) = element.class_list().toggle_with_force(class, on) {
        log::warn!("failed to toggle {}: {:?}", class, err);
    }
}

/// Marks the `.nav-link` whose `href` is `#<id>` of the section crossing the
/// middle band of the viewport.
#[wasm_bindgen]
pub struct ActiveNav {
    observer: Option<Observer>,
}

#[wasm_bindgen]
impl ActiveNav {
    pub fn start() -> Result<Option<ActiveNav>, JsValue> {
        let (_, document) = match window_and_document() {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let sections = query_all(&document, SECTION_SELECTOR)?;
        if sections.is_empty() {
            log::debug!("no sections, active nav disabled");
            return Ok(None);
        }
        let links = query_all(&document, LINK_SELECTOR)?;
        let observer = Observer::new(ACTIVE_BAND, 0.0, &sections, move |entry, _| {
            if !entry.is_intersecting() {
                return;
            }
            let id = entry.target().id();
            for link in &links {
                set_class(link, ACTIVE_CLASS, links_to(link.get_attribute("href").as_deref(), &id));
            }
        })?;
        Ok(Some(ActiveNav {
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

/// Opens and closes the nav list from the burger button; following any link
/// closes it again.
#[wasm_bindgen]
pub struct BurgerMenu {
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl BurgerMenu {
    /// `None` unless both the button and the list exist.
    pub fn start(burger_id: &str, list_id: &str) -> Result<Option<BurgerMenu>, JsValue> {
        let (_, document) = match window_and_document() {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let (burger, list) = match (document.get_element_by_id(burger_id), document.get_element_by_id(list_id)) {
            (Some(burger), Some(list)) => (burger, list),
            _ => {
                log::debug!("no #{} with #{}, burger menu disabled", burger_id, list_id);
                return Ok(None);
            }
        };

        let mut listeners = Vec::new();
        {
            let (button, list) = (burger.clone(), list.clone());
            listeners.push(EventListener::new(&burger, "click", false, move |_| {
                let open = match list.class_list().toggle(OPEN_CLASS) {
                    Ok(open) => open,
                    Err(err) => {
                        log::warn!("failed to toggle menu: {:?}", err);
                        return;
                    }
                };
                set_class(&button, OPEN_CLASS, open);
                if let Err(err) = button.set_attribute("aria-expanded", if open { "true" } else { "false" }) {
                    log::warn!("failed to set aria-expanded: {:?}", err);
                }
            })?);
        }
        let links = list.query_selector_all(LINK_SELECTOR)?;
        for link in (0..links.length()).filter_map(|i| links.get(i)) {
            let (burger, list) = (burger.clone(), list.clone());
            listeners.push(EventListener::new(&link, "click", true, move |_| {
                set_class(&list, OPEN_CLASS, false);
                set_class(&burger, OPEN_CLASS, false);
            })?);
        }
        Ok(Some(BurgerMenu { listeners }))
    }

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
    fn link_matches_its_own_section() {
        assert!(links_to(Some("#about"), "about"));
        assert!(!links_to(Some("#about"), "skills"));
    }

    #[test]
    fn only_fragment_links_match() {
        assert!(!links_to(Some("about"), "about"));
        assert!(!links_to(Some("/#about"), "about"));
        assert!(!links_to(Some("#About"), "about"));
        assert!(!links_to(None, "about"));
    }

    #[test]
    fn bare_hash_matches_an_empty_id() {
        assert!(links_to(Some("#"), ""));
        assert!(!links_to(Some("#"), "top"));
    }

    #[test]
    fn exported_check_takes_owned_href() {
        assert!(is_active_link(Some("#contact".to_owned()), "contact"));
        assert!(!is_active_link(None, "contact"));
    }
}
