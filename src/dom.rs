// Small DOM helpers shared by the page behaviours. Listeners and observers
// detach themselves when dropped, so a behaviour handle owns everything it
// registered with the browser.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub fn window_and_document() -> Option<(Window, Document)> {
    let window = web_sys::window()?;
    let document = window.document()?;
    Some((window, document))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Runs `f` once after `delay_ms`. The callback frees itself after running.
pub fn set_timeout_once<F>(window: &Window, delay_ms: u32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )
}

pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl EventListener {
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        passive: bool,
        callback: F,
    ) -> Result<EventListener, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event_type,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(EventListener {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {:?}", self.event_type, err);
        }
    }
}

/// IntersectionObserver over a fixed set of targets; disconnects on drop.
pub struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Observer {
    pub fn new<F>(
        root_margin: &str,
        threshold: f64,
        targets: &[Element],
        mut on_entry: F,
    ) -> Result<Observer, JsValue>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        for target in targets {
            observer.observe(target);
        }
        Ok(Observer {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for Observer {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes every element matching `selector` and calls `apply` the first
/// time each one intersects. `None` when nothing matches.
pub fn observe_once<F>(
    selector: &str,
    root_margin: &str,
    threshold: f64,
    mut apply: F,
) -> Result<Option<Observer>, JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let (_, document) = match window_and_document() {
        Some(pair) => pair,
        None => return Ok(None),
    };
    let targets = query_all(&document, selector)?;
    if targets.is_empty() {
        log::debug!("nothing matches {}, observer not started", selector);
        return Ok(None);
    }
    Observer::new(root_margin, threshold, &targets, move |entry, observer| {
        if entry.is_intersecting() {
            let target = entry.target();
            apply(&target);
            observer.unobserve(&target);
        }
    })
    .map(Some)
}
