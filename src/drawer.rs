//! Mobile navigation drawer.
//!
//! Inert unless the trigger, panel, backdrop and close button all exist.
//! Opening locks page scroll and traps focus inside the panel; closing
//! restores both. The backdrop, the close button, any link in the panel and
//! Escape all close it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, MouseEvent};

use crate::dom::{self, qs, qs_within, qsa_within, set_aria_expanded};
use crate::focus_trap::FocusTrap;
use crate::scroll_lock;

const OPEN_CLASS: &str = "open";

pub fn init(document: &Document, trap: &Rc<RefCell<FocusTrap>>) {
    let Some(burger) = qs(document, dom::BURGER) else {
        return;
    };
    let Some(drawer) = qs(document, dom::DRAWER) else {
        return;
    };
    let Some(backdrop) = qs_within(&drawer, dom::DRAWER_BACKDROP) else {
        return;
    };
    let Some(close_btn) = qs_within(&drawer, dom::DRAWER_CLOSE) else {
        return;
    };
    debug!("drawer armed");

    let on_open = {
        let document = document.clone();
        let drawer = drawer.clone();
        let burger = burger.clone();
        let trap = Rc::clone(trap);
        Closure::wrap(Box::new(move |_: MouseEvent| {
            open(&document, &drawer, &burger, &trap);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = burger.add_event_listener_with_callback("click", on_open.as_ref().unchecked_ref());
    on_open.forget();

    for closer in [backdrop, close_btn]
        .into_iter()
        .chain(qsa_within(&drawer, "a"))
    {
        let on_close = {
            let document = document.clone();
            let drawer = drawer.clone();
            let burger = burger.clone();
            let trap = Rc::clone(trap);
            Closure::wrap(Box::new(move |_: MouseEvent| {
                close(&document, &drawer, &burger, &trap);
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = closer.add_event_listener_with_callback("click", on_close.as_ref().unchecked_ref());
        on_close.forget();
    }

    let on_escape = {
        let document = document.clone();
        let drawer = drawer.clone();
        let burger = burger.clone();
        let trap = Rc::clone(trap);
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" && drawer.class_list().contains(OPEN_CLASS) {
                close(&document, &drawer, &burger, &trap);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let _ = document.add_event_listener_with_callback("keydown", on_escape.as_ref().unchecked_ref());
    on_escape.forget();
}

fn open(document: &Document, drawer: &Element, burger: &Element, trap: &Rc<RefCell<FocusTrap>>) {
    let _ = drawer.class_list().add_1(OPEN_CLASS);
    set_aria_expanded(burger, true);
    scroll_lock::lock(document);
    trap.borrow_mut().activate(drawer);
}

fn close(document: &Document, drawer: &Element, burger: &Element, trap: &Rc<RefCell<FocusTrap>>) {
    let _ = drawer.class_list().remove_1(OPEN_CLASS);
    set_aria_expanded(burger, false);
    trap.borrow_mut().deactivate();
    scroll_lock::unlock(document);
}
