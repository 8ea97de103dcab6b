//! Language switcher dropdowns.
//!
//! Each switcher opens on its toggle and closes on Escape or any click
//! outside a switcher. Opening one closes the rest, so at most one menu is
//! open at a time. The toggle stops propagation so the document-level dismiss
//! never sees the click that just opened a menu.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::dom::{self, qs_within, qsa, set_aria_expanded};

const OPEN_CLASS: &str = "open";

pub fn init(document: &Document) {
    let switchers = qsa(document, dom::LANG_SWITCHER);
    debug!("language menus: {} switcher(s)", switchers.len());

    for switcher in &switchers {
        wire_switcher(document, switcher);
    }

    let doc = document.clone();
    let dismiss = Closure::wrap(Box::new(move |_: MouseEvent| {
        close_all(&doc, None);
    }) as Box<dyn FnMut(MouseEvent)>);
    let _ = document.add_event_listener_with_callback("click", dismiss.as_ref().unchecked_ref());
    dismiss.forget();
}

fn wire_switcher(document: &Document, switcher: &Element) {
    let Some(toggle) = qs_within(switcher, dom::LANG_TOGGLE) else {
        return;
    };
    let Some(menu) = qs_within(switcher, dom::LANG_MENU) else {
        return;
    };

    let on_toggle = {
        let doc = document.clone();
        let switcher = switcher.clone();
        let toggle = toggle.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            event.stop_propagation();
            let will_open = !switcher.class_list().contains(OPEN_CLASS);
            close_all(&doc, Some(&switcher));
            let _ = switcher.class_list().toggle_with_force(OPEN_CLASS, will_open);
            set_aria_expanded(&toggle, will_open);
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    let _ = toggle.add_event_listener_with_callback("click", on_toggle.as_ref().unchecked_ref());
    on_toggle.forget();

    let on_menu_key = {
        let switcher = switcher.clone();
        let toggle = toggle.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                let _ = switcher.class_list().remove_1(OPEN_CLASS);
                set_aria_expanded(&toggle, false);
                if let Some(toggle) = toggle.dyn_ref::<HtmlElement>() {
                    let _ = toggle.focus();
                }
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    let _ = menu.add_event_listener_with_callback("keydown", on_menu_key.as_ref().unchecked_ref());
    on_menu_key.forget();
}

/// Closes every switcher except the excluded one, which the toggle handler
/// passes so its own state change survives the sweep.
fn close_all(document: &Document, except: Option<&Element>) {
    for switcher in qsa(document, dom::LANG_SWITCHER) {
        if except == Some(&switcher) {
            continue;
        }
        let _ = switcher.class_list().remove_1(OPEN_CLASS);
        if let Some(toggle) = qs_within(&switcher, dom::LANG_TOGGLE) {
            set_aria_expanded(&toggle, false);
        }
    }
}
