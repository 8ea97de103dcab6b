//! Privacy policy modal.
//!
//! Same scroll-lock and focus-trap contract as the drawer, but with any
//! number of openers and closers. Openers are usually anchors, so opening
//! prevents their default navigation.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::dom::{self, qs, qs_within, qsa, qsa_within};
use crate::focus_trap::FocusTrap;
use crate::scroll_lock;

const OPEN_CLASS: &str = "open";

pub fn init(document: &Document, trap: &Rc<RefCell<FocusTrap>>) {
    let Some(modal) = qs(document, dom::PRIVACY_MODAL) else {
        return;
    };
    let Some(overlay) = qs_within(&modal, dom::PRIVACY_OVERLAY) else {
        return;
    };
    let openers = qsa(document, dom::PRIVACY_OPEN);
    if openers.is_empty() {
        return;
    }
    let closers = qsa_within(&modal, dom::PRIVACY_CLOSE);
    debug!("privacy modal armed: {} opener(s)", openers.len());

    for opener in openers {
        let on_open = {
            let document = document.clone();
            let modal = modal.clone();
            let trap = Rc::clone(trap);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                event.prevent_default();
                open(&document, &modal, &trap);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = opener.add_event_listener_with_callback("click", on_open.as_ref().unchecked_ref());
        on_open.forget();
    }

    for closer in std::iter::once(overlay).chain(closers) {
        let on_close = {
            let document = document.clone();
            let modal = modal.clone();
            let trap = Rc::clone(trap);
            Closure::wrap(Box::new(move |_: MouseEvent| {
                close(&document, &modal, &trap);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = closer.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
        on_close.forget();
    }

    let on_escape = {
        let document = document.clone();
        let modal = modal.clone();
        let trap = Rc::clone(trap);
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" && modal.class_list().contains(OPEN_CLASS) {
                close(&document, &modal, &trap);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let _ = document.add_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref());
    on_escape.forget();
}

fn open(document: &Document, modal: &Element, trap: &Rc<RefCell<FocusTrap>>) {
    let _ = modal.class_list().add_1(OPEN_CLASS);
    scroll_lock::lock(document);
    trap.borrow_mut().activate(modal);
}

fn close(document: &Document, modal: &Element, trap: &Rc<RefCell<FocusTrap>>) {
    let _ = modal.class_list().remove_1(OPEN_CLASS);
    trap.borrow_mut().deactivate();
    scroll_lock::unlock(document);
}
