// Contact form checks. Nothing is sent anywhere: a valid form only gets the
// success status after a short simulated delay.

use crate::dom::{set_timeout_once, window_and_document, EventListener};
use crate::text;
use std::error::Error;
use std::fmt;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, Window};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll be in touch soon 🚀";
pub const SEND_DELAY_MS: u32 = 1600;
pub const STATUS_CLEAR_MS: u32 = 5500;

const SENDING_LABEL: &str = "Sending…";
const SEND_BUTTON_HTML: &str = "Send Message <i class=\"fa-solid fa-paper-plane\"></i>";
const STATUS_CLASS: &str = "cf-status";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContactError {
    MissingFields,
    InvalidEmail,
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => f.write_str("Please fill in all required fields."),
            ContactError::InvalidEmail => f.write_str("Please enter a valid email address."),
        }
    }
}

impl Error for ContactError {}

/// Checks the trimmed fields: all three are required and the email must look
/// like `local@domain.tld`. Trimming and the email check use the browser's
/// whitespace set.
pub fn validate(name: &str, email: &str, message: &str) -> Result<(), ContactError> {
    let (name, email, message) = (text::trim(name), text::trim(email), text::trim(message));
    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ContactError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(())
}

// `^[^\s@]+@[^\s@]+\.[^\s@]+$`: one '@', no whitespace, a non-empty local
// part and a dot inside the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(text::is_js_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Outcome of a submit, ready to be shown in the form's status line.
#[wasm_bindgen]
#[derive(Clone, Debug, PartialEq)]
pub struct ContactStatus {
    ok: bool,
    message: String,
}

#[wasm_bindgen]
impl ContactStatus {
    #[wasm_bindgen(getter)]
    pub fn ok(&self) -> bool {
        self.ok
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    #[wasm_bindgen(getter, js_name = className)]
    pub fn class_name(&self) -> String {
        if self.ok {
            format!("{} ok", STATUS_CLASS)
        } else {
            format!("{} err", STATUS_CLASS)
        }
    }

    /// How long the host waits (simulating the send) before showing the status.
    #[wasm_bindgen(getter, js_name = delayMs)]
    pub fn delay_ms(&self) -> u32 {
        if self.ok {
            SEND_DELAY_MS
        } else {
            0
        }
    }

    /// How long the status stays visible once shown.
    #[wasm_bindgen(getter, js_name = clearAfterMs)]
    pub fn clear_after_ms(&self) -> u32 {
        STATUS_CLEAR_MS
    }
}

impl From<Result<(), ContactError>> for ContactStatus {
    fn from(result: Result<(), ContactError>) -> Self {
        match result {
            Ok(()) => ContactStatus {
                ok: true,
                message: SUCCESS_MESSAGE.to_owned(),
            },
            Err(err) => ContactStatus {
                ok: false,
                message: err.to_string(),
            },
        }
    }
}

#[wasm_bindgen]
pub fn validate_contact(name: &str, email: &str, message: &str) -> ContactStatus {
    let result = validate(name, email, message);
    if let Err(err) = result {
        log::debug!("contact form rejected: {:?}", err);
    }
    ContactStatus::from(result)
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    form.query_selector(&format!("[name=\"{}\"]", name))
        .ok()
        .flatten()
        .and_then(|field| js_sys::Reflect::get(&field, &JsValue::from_str("value")).ok())
        .and_then(|value| value.as_string())
        .unwrap_or_default()
}

// Shows a status line and clears it again after `STATUS_CLEAR_MS`
fn show_status(window: &Window, line: &Element, status: &ContactStatus) -> Result<(), JsValue> {
    line.set_text_content(Some(&status.message));
    line.set_class_name(&status.class_name());
    let line = line.clone();
    set_timeout_once(window, status.clear_after_ms(), move || {
        line.set_text_content(Some(""));
        line.set_class_name(STATUS_CLASS);
    })?;
    Ok(())
}

fn submit(window: &Window, form: &HtmlFormElement, line: &Element) -> Result<(), JsValue> {
    let status = validate_contact(
        &field_value(form, "name"),
        &field_value(form, "email"),
        &field_value(form, "message"),
    );
    if !status.ok {
        return show_status(window, line, &status);
    }

    let button = form.query_selector("button[type=\"submit\"]")?;
    if let Some(button) = &button {
        button.set_attribute("disabled", "")?;
        button.set_text_content(Some(SENDING_LABEL));
    }
    let (done_window, form, line) = (window.clone(), form.clone(), line.clone());
    set_timeout_once(window, status.delay_ms(), move || {
        if let Err(err) = show_status(&done_window, &line, &status) {
            log::warn!("failed to show contact status: {:?}", err);
        }
        form.reset();
        if let Some(button) = button {
            if let Err(err) = button.remove_attribute("disabled") {
                log::warn!("failed to re-enable submit button: {:?}", err);
            }
            button.set_inner_html(SEND_BUTTON_HTML);
        }
    })?;
    Ok(())
}

/// Intercepts the contact form's submit: validates, then fakes a send.
#[wasm_bindgen]
pub struct ContactForm {
    on_submit: Option<EventListener>,
}

#[wasm_bindgen]
impl ContactForm {
    /// `None` unless both the form and its status line exist.
    pub fn start(form_id: &str, status_id: &str) -> Result<Option<ContactForm>, JsValue> {
        let (window, document) = match window_and_document() {
            Some(pair) => pair,
            None => return Ok(None),
        };
        let form = document
            .get_element_by_id(form_id)
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok());
        let (form, line) = match (form, document.get_element_by_id(status_id)) {
            (Some(form), Some(line)) => (form, line),
            _ => {
                log::debug!("no form #{} with status #{}, contact form disabled", form_id, status_id);
                return Ok(None);
            }
        };

        let submit_form = form.clone();
        let on_submit = EventListener::new(&form, "submit", false, move |event| {
            event.prevent_default();
            if let Err(err) = submit(&window, &submit_form, &line) {
                log::warn!("contact form submit failed: {:?}", err);
            }
        })?;
        Ok(Some(ContactForm {
            on_submit: Some(on_submit),
        }))
    }

    pub fn stop(&mut self) {
        self.on_submit.take();
    }

    pub fn is_running(&self) -> bool {
        self.on_submit.is_some()
    }
}
