// Count-up numbers for `[data-target]` elements

use crate::dom::{observe_once, set_timeout_once, Observer};
use crate::text;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

/// Milliseconds between two values of a count-up.
pub const COUNT_UP_INTERVAL_MS: u32 = 28;
const COUNT_UP_STEPS: u32 = 40;

/// Reads a `data-target` attribute: leading whitespace, an optional `+` and
/// a run of digits, like `parseInt(value, 10)`. Unlike the page script,
/// which would count towards a negative target, negative and unparsable
/// values give 0; values past `u32::MAX` saturate.
#[wasm_bindgen]
pub fn parse_target(value: &str) -> u32 {
    let value = text::trim_start(value);
    let value = value.strip_prefix('+').unwrap_or(value);
    let digits = value
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(value.len(), |(i, _)| i);
    if digits == 0 {
        return 0;
    }
    value[..digits].parse().unwrap_or(u32::MAX)
}

/// Sequence of values shown while counting up to `target`, ending exactly
/// on the target.
#[wasm_bindgen]
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    step: u32,
    current: u32,
    done: bool,
}

#[wasm_bindgen]
impl CountUp {
    #[wasm_bindgen(constructor)]
    pub fn new(target: u32) -> CountUp {
        let step = target / COUNT_UP_STEPS + (target % COUNT_UP_STEPS != 0) as u32;
        CountUp {
            target,
            step,
            current: 0,
            done: false,
        }
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn step_size(&self) -> u32 {
        self.step
    }

    /// Next value to display, or `undefined` once the target was shown.
    #[wasm_bindgen(js_name = next)]
    pub fn next_value(&mut self) -> Option<u32> {
        self.next()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CountUp {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        self.current = self.current.saturating_add(self.step);
        if self.current >= self.target {
            self.current = self.target;
            self.done = true;
        }
        Some(self.current)
    }
}

const COUNTER_SELECTOR: &str = "[data-target]";
const COUNTER_THRESHOLD: f64 = 0.7;

// Shows the next value after one interval and keeps going until the target
fn schedule_count(window: Window, element: Element, mut counter: CountUp) {
    let tick_window = window.clone();
    let scheduled = set_timeout_once(&window, COUNT_UP_INTERVAL_MS, move || {
        if let Some(value) = counter.next() {
            element.set_text_content(Some(&value.to_string()));
            if !counter.is_done() {
                schedule_count(tick_window, element, counter);
            }
        }
    });
    if let Err(err) = scheduled {
        log::warn!("failed to schedule count-up: {:?}", err);
    }
}

/// Counts every `[data-target]` element up to its target the first time it
/// is mostly on screen.
#[wasm_bindgen]
pub struct Counters {
    observer: Option<Observer>,
}

#[wasm_bindgen]
impl Counters {
    pub fn start() -> Result<Option<Counters>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let observer = observe_once(COUNTER_SELECTOR, "0px", COUNTER_THRESHOLD, move |element| {
            let target = parse_target(&element.get_attribute("data-target").unwrap_or_default());
            schedule_count(window.clone(), element.clone(), CountUp::new(target));
        })?;
        Ok(observer.map(|observer| Counters {
            observer: Some(observer),
        }))
    }

    /// Stops watching for counters that have not started yet. Counts already
    /// under way run to their target.
    pub fn stop(&mut self) {
        self.observer.take();
    }

    pub fn is_running(&self) -> bool {
        self.observer.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_leading_digits() {
        assert_eq!(parse_target("250"), 250);
        assert_eq!(parse_target("  42px"), 42);
        assert_eq!(parse_target("\u{FEFF}\u{00A0}12"), 12);
        assert_eq!(parse_target("+7"), 7);
        assert_eq!(parse_target("3.9"), 3);
        assert_eq!(parse_target(""), 0);
        assert_eq!(parse_target("abc"), 0);
    }

    #[test]
    fn negative_targets_count_to_zero() {
        assert_eq!(parse_target("-15"), 0);
        assert_eq!(parse_target(" -1"), 0);
        let values: Vec<u32> = CountUp::new(parse_target("-15")).collect();
        assert_eq!(values, vec![0]);
    }

    #[test]
    fn huge_targets_saturate() {
        assert_eq!(parse_target("99999999999999"), u32::MAX);
    }

    #[test]
    fn small_target_counts_by_one() {
        let values: Vec<u32> = CountUp::new(5).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn large_target_takes_forty_steps() {
        let counter = CountUp::new(1200);
        assert_eq!(counter.step_size(), 30);
        let values: Vec<u32> = counter.collect();
        assert_eq!(values.len(), 40);
        assert_eq!(values[0], 30);
        assert_eq!(*values.last().unwrap(), 1200);
    }

    #[test]
    fn last_step_is_clamped_to_target() {
        let values: Vec<u32> = CountUp::new(50).collect();
        assert_eq!(values, vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26, 28, 30, 32, 34, 36, 38, 40, 42, 44, 46, 48, 50]);

        let values: Vec<u32> = CountUp::new(81).collect();
        assert_eq!(CountUp::new(81).step_size(), 3);
        assert_eq!(values.len(), 27);
        assert_eq!(*values.last().unwrap(), 81);
    }

    #[test]
    fn zero_target_shows_zero_once() {
        let mut counter = CountUp::new(0);
        assert_eq!(counter.next_value(), Some(0));
        assert!(counter.is_done());
        assert_eq!(counter.next_value(), None);
    }

    #[test]
    fn max_target_does_not_overflow() {
        let mut counter = CountUp::new(u32::MAX);
        let last = counter.by_ref().last();
        assert_eq!(last, Some(u32::MAX));
        assert!(counter.is_done());
    }
}
