// Typing effect for the hero subtitle: types a phrase out character by
// character, holds it, deletes it and moves on to the next one.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

pub const TYPE_DELAY_MS: u32 = 85;
pub const DELETE_DELAY_MS: u32 = 45;
pub const HOLD_DELAY_MS: u32 = 2200;
pub const NEXT_PHRASE_DELAY_MS: u32 = 380;

pub const DEFAULT_PHRASES: [&str; 5] = [
    "Front-End Developer",
    "Software Engineering Student",
    "Angular Developer",
    "UI/UX Enthusiast",
    "Web Performance Optimizer",
];

#[derive(Clone, Debug, PartialEq)]
pub struct TypedFrame {
    pub text: String,
    pub delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    phrase: usize,
    shown: usize,
    deleting: bool,
}

impl Typewriter {
    /// Empty phrases are skipped; with none left `step` always returns `None`.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().chars().collect::<Vec<char>>())
            .filter(|p| !p.is_empty())
            .collect();
        Typewriter {
            phrases,
            phrase: 0,
            shown: 0,
            deleting: false,
        }
    }

    /// Text to display now and how long to wait before the next step.
    pub fn step(&mut self) -> Option<TypedFrame> {
        let len = self.phrases.get(self.phrase)?.len();

        let delay_ms = if !self.deleting {
            self.shown += 1;
            if self.shown == len {
                self.deleting = true;
                HOLD_DELAY_MS
            } else {
                TYPE_DELAY_MS
            }
        } else {
            self.shown -= 1;
            if self.shown == 0 {
                self.deleting = false;
                NEXT_PHRASE_DELAY_MS
            } else {
                DELETE_DELAY_MS
            }
        };

        let text = self.phrases[self.phrase][..self.shown].iter().collect();
        if !self.deleting && self.shown == 0 {
            self.phrase = (self.phrase + 1) % self.phrases.len();
        }
        Some(TypedFrame { text, delay_ms })
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Typewriter::new(DEFAULT_PHRASES.iter())
    }
}

type TimeoutCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Drives a `Typewriter` with `setTimeout`, writing each step into an
/// element's text content.
#[wasm_bindgen]
pub struct TypingEffect {
    window: Window,
    callback: TimeoutCallback,
    timeout_id: Rc<RefCell<Option<i32>>>,
}

#[wasm_bindgen]
impl TypingEffect {
    /// Starts typing the default phrases into the element with id
    /// `element_id`. Returns `None` when the element is missing.
    pub fn start(element_id: &str) -> Result<Option<TypingEffect>, JsValue> {
        let window = match web_sys::window() {
            Some(window) => window,
            None => return Ok(None),
        };
        let element = match window
            .document()
            .and_then(|document| document.get_element_by_id(element_id))
        {
            Some(element) => element,
            None => {
                log::debug!("no element #{}, typing effect disabled", element_id);
                return Ok(None);
            }
        };
        TypingEffect::run(window, element, Typewriter::default()).map(Some)
    }

    /// Cancels the pending step. Dropping the handle does the same.
    pub fn stop(&mut self) {
        if let Some(id) = self.timeout_id.borrow_mut().take() {
            self.window.clear_timeout_with_handle(id);
        }
        self.callback.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }
}

impl TypingEffect {
    fn run(window: Window, element: Element, mut typewriter: Typewriter) -> Result<TypingEffect, JsValue> {
        let callback: TimeoutCallback = Rc::new(RefCell::new(None));
        let timeout_id = Rc::new(RefCell::new(None));
        {
            let window = window.clone();
            let handle = callback.clone();
            let timeout_id = timeout_id.clone();
            *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                timeout_id.borrow_mut().take();
                let frame = match typewriter.step() {
                    Some(frame) => frame,
                    None => return,
                };
                element.set_text_content(Some(frame.text.as_str()));
                if let Err(err) = schedule(&window, &handle, &timeout_id, frame.delay_ms) {
                    log::warn!("failed to schedule typing step: {:?}", err);
                }
            }) as Box<dyn FnMut()>));
        }
        schedule(&window, &callback, &timeout_id, 0)?;

        Ok(TypingEffect {
            window,
            callback,
            timeout_id,
        })
    }
}

impl Drop for TypingEffect {
    fn drop(&mut self) {
        self.stop();
    }
}

fn schedule(
    window: &Window,
    callback: &TimeoutCallback,
    timeout_id: &RefCell<Option<i32>>,
    delay_ms: u32,
) -> Result<(), JsValue> {
    if let Some(callback) = callback.borrow().as_ref() {
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )?;
        *timeout_id.borrow_mut() = Some(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(typewriter: &mut Typewriter, steps: usize) -> Vec<(String, u32)> {
        (0..steps)
            .map(|_| {
                let frame = typewriter.step().unwrap();
                (frame.text, frame.delay_ms)
            })
            .collect()
    }

    fn owned(frames: &[(&str, u32)]) -> Vec<(String, u32)> {
        frames.iter().map(|(t, d)| (t.to_string(), *d)).collect()
    }

    #[test]
    fn types_holds_deletes_and_advances() {
        let mut typewriter = Typewriter::new(vec!["abc", "xy"]);
        let frames = run(&mut typewriter, 12);
        assert_eq!(
            frames,
            owned(&[
                ("a", 85),
                ("ab", 85),
                ("abc", 2200),
                ("ab", 45),
                ("a", 45),
                ("", 380),
                ("x", 85),
                ("xy", 2200),
                ("x", 45),
                ("", 380),
                ("a", 85),
                ("ab", 85),
            ])
        );
    }

    #[test]
    fn single_character_phrase() {
        let mut typewriter = Typewriter::new(vec!["c"]);
        assert_eq!(run(&mut typewriter, 3), owned(&[("c", 2200), ("", 380), ("c", 2200)]));
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typewriter = Typewriter::new(vec!["héé"]);
        let frames = run(&mut typewriter, 3);
        assert_eq!(frames[1].0, "hé");
        assert_eq!(frames[2], ("héé".to_string(), 2200));
    }

    #[test]
    fn empty_phrases_are_skipped() {
        let mut typewriter = Typewriter::new(vec!["", "ok", ""]);
        assert_eq!(run(&mut typewriter, 2), owned(&[("o", 85), ("ok", 2200)]));
    }

    #[test]
    fn no_phrases_means_no_frames() {
        let mut typewriter = Typewriter::new(Vec::<String>::new());
        assert_eq!(typewriter.step(), None);
        let mut typewriter = Typewriter::new(vec![""]);
        assert_eq!(typewriter.step(), None);
    }

    #[test]
    fn default_phrases_cycle_back_to_the_first() {
        let mut typewriter = Typewriter::default();
        let steps: usize = DEFAULT_PHRASES
            .iter()
            .map(|p| p.chars().count() * 2)
            .sum();
        let frames = run(&mut typewriter, steps + 1);
        assert_eq!(frames[steps - 1], (String::new(), NEXT_PHRASE_DELAY_MS));
        assert_eq!(frames[steps], ("F".to_string(), TYPE_DELAY_MS));
    }
}
