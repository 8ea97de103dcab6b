//! Client-side validation for the lead forms. No network call is ever made;
//! a valid submission just resets the form and shows the confirmation note
//! for a while.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use regex::Regex;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::dom::{self, qs_within, qsa};

const NOTE_HIDE_DELAY_MS: u32 = 4_200;

pub fn init(document: &Document) {
    let forms = qsa(document, dom::LEAD_FORM);
    if forms.is_empty() {
        return;
    }
    debug!("lead forms: {} form(s)", forms.len());

    for form in forms {
        if let Ok(form) = form.dyn_into::<HtmlFormElement>() {
            wire_form(form);
        }
    }
}

fn wire_form(form: HtmlFormElement) {
    // Pending note-hide timer; replacing it drops and thereby cancels the
    // previous one, so a quick resubmission reschedules instead of racing.
    let pending_hide: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    let on_submit = {
        let form = form.clone();
        Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            handle_submit(&form, &pending_hide);
        }) as Box<dyn FnMut(Event)>)
    };
    let _ = form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref());
    on_submit.forget();
}

fn handle_submit(form: &HtmlFormElement, pending_hide: &Rc<RefCell<Option<Timeout>>>) {
    let name = field(form, "name");
    let email = field(form, "email");
    let phone = field(form, "phone");

    let mut valid = true;

    for input in [name.as_ref(), email.as_ref(), phone.as_ref()]
        .into_iter()
        .flatten()
    {
        if input.value().trim().is_empty() {
            let _ = input.set_attribute("aria-invalid", "true");
            valid = false;
        } else {
            let _ = input.remove_attribute("aria-invalid");
        }
    }

    if let Some(email) = &email {
        let value = email.value();
        let value = value.trim();
        if !value.is_empty() && !email_ok(value) {
            let _ = email.set_attribute("aria-invalid", "true");
            valid = false;
        }
    }

    if !valid {
        if let Some(first_invalid) = qs_within(form.as_ref(), "[aria-invalid='true']") {
            if let Some(first_invalid) = first_invalid.dyn_ref::<HtmlElement>() {
                let _ = first_invalid.focus();
            }
        }
        return;
    }

    form.reset();
    if let Some(note) = qs_within(form.as_ref(), dom::FORM_NOTE)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    {
        note.set_hidden(false);
        let timeout = Timeout::new(NOTE_HIDE_DELAY_MS, move || {
            note.set_hidden(true);
        });
        *pending_hide.borrow_mut() = Some(timeout);
    }
}

fn field(form: &HtmlFormElement, name: &str) -> Option<HtmlInputElement> {
    qs_within(form.as_ref(), &format!("input[name='{name}']"))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

// Deliberately loose: anything@anything.anything, nothing more. Tightening
// this would reject addresses the site currently accepts.
fn email_ok(value: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .expect("email pattern")
        .is_match(value)
}

#[cfg(test)]
mod tests {
    use super::email_ok;

    #[test]
    fn accepts_plain_addresses() {
        assert!(email_ok("jo@example.com"));
        assert!(email_ok("a@b.c"));
        assert!(email_ok("first.last+tag@sub.domain.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!email_ok("bad-email"));
        assert!(!email_ok("a@b"));
        assert!(!email_ok("a @b.c"));
        assert!(!email_ok("a@ b.c"));
        assert!(!email_ok("a@b.c d"));
        assert!(!email_ok("@b.c"));
        assert!(!email_ok("a@."));
        assert!(!email_ok(""));
    }

    #[test]
    fn stays_permissive_about_domains() {
        // Single-letter TLDs and unusual hosts pass on purpose.
        assert!(email_ok("x@y.z"));
        assert!(email_ok("user@localhost.local"));
    }
}
