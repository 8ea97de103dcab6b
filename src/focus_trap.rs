//! Keyboard focus trap shared by the drawer and the privacy modal.
//!
//! At most one trap is active at a time; activating a new one releases the
//! previous context (its keydown listener goes away) before the new container
//! takes over. Tab on the last focusable wraps to the first, Shift+Tab on the
//! first wraps to the last. Pointer focus is not intercepted.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};

use crate::dom::qsa_within;

const FOCUSABLE: &str = "a[href], button:not([disabled]), input:not([disabled]), \
     select:not([disabled]), textarea:not([disabled]), [tabindex]:not([tabindex='-1'])";

struct ActiveTrap {
    container: Element,
    previous: Option<HtmlElement>,
    handler: Closure<dyn FnMut(KeyboardEvent)>,
}

pub struct FocusTrap {
    active: Option<ActiveTrap>,
}

impl FocusTrap {
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Confines Tab navigation to `container` and moves focus to its first
    /// visible focusable descendant. No-op when the container has none.
    pub fn activate(&mut self, container: &Element) {
        let focusables: Vec<HtmlElement> = qsa_within(container, FOCUSABLE)
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
            .filter(is_visible)
            .collect();

        let Some(first) = focusables.first().cloned() else {
            return;
        };
        let last = focusables.last().cloned().unwrap_or_else(|| first.clone());

        // Replace any trap that is still active, dropping its listener but
        // leaving focus alone since we move it below anyway.
        if let Some(old) = self.active.take() {
            remove_handler(&old);
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let previous = document
            .active_element()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let handler = {
            let first = first.clone();
            let last = last.clone();
            Closure::wrap(Box::new(move |event: KeyboardEvent| {
                if event.key() != "Tab" {
                    return;
                }
                let active = document.active_element();
                if event.shift_key() && active.as_ref() == Some(first.as_ref()) {
                    event.prevent_default();
                    let _ = last.focus();
                } else if !event.shift_key() && active.as_ref() == Some(last.as_ref()) {
                    event.prevent_default();
                    let _ = first.focus();
                }
            }) as Box<dyn FnMut(KeyboardEvent)>)
        };

        let _ = container
            .add_event_listener_with_callback("keydown", handler.as_ref().unchecked_ref());
        let _ = first.focus();

        self.active = Some(ActiveTrap {
            container: container.clone(),
            previous,
            handler,
        });
    }

    /// Releases the trap and hands focus back to whatever element had it when
    /// the trap was activated.
    pub fn deactivate(&mut self) {
        let Some(trap) = self.active.take() else {
            return;
        };
        remove_handler(&trap);
        if let Some(previous) = trap.previous {
            let _ = previous.focus();
        }
    }
}

fn remove_handler(trap: &ActiveTrap) {
    let _ = trap
        .container
        .remove_event_listener_with_callback("keydown", trap.handler.as_ref().unchecked_ref());
}

// Visible means the element has an in-flow box, or is fixed-positioned (fixed
// elements have no offsetParent even when rendered).
fn is_visible(el: &HtmlElement) -> bool {
    if el.offset_parent().is_some() {
        return true;
    }
    web_sys::window()
        .and_then(|w| w.get_computed_style(el).ok().flatten())
        .and_then(|style| style.get_property_value("position").ok())
        .map(|position| position == "fixed")
        .unwrap_or(false)
}
