//! FAQ accordion. The first item starts expanded; clicking a question opens
//! that item and collapses the rest, clicking the open one collapses
//! everything. Never more than one item active.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

use crate::dom::{self, qs_within, qsa, set_aria_expanded};

const ACTIVE_CLASS: &str = "active";

pub fn init(document: &Document) {
    let items = qsa(document, dom::FAQ_ITEM);
    if items.is_empty() {
        return;
    }
    debug!("faq accordion: {} item(s)", items.len());

    for (index, item) in items.iter().enumerate() {
        let Some(question) = qs_within(item, dom::FAQ_QUESTION) else {
            continue;
        };

        if index == 0 {
            let _ = item.class_list().add_1(ACTIVE_CLASS);
            set_aria_expanded(&question, true);
        } else {
            set_aria_expanded(&question, false);
        }

        let on_click = {
            let items = items.clone();
            let item = item.clone();
            let question = question.clone();
            Closure::wrap(Box::new(move |_: MouseEvent| {
                let was_active = item.class_list().contains(ACTIVE_CLASS);
                collapse_all(&items);
                if !was_active {
                    let _ = item.class_list().add_1(ACTIVE_CLASS);
                    set_aria_expanded(&question, true);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let _ = question.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
        on_click.forget();
    }
}

fn collapse_all(items: &[Element]) {
    for item in items {
        let _ = item.class_list().remove_1(ACTIVE_CLASS);
        if let Some(question) = qs_within(item, dom::FAQ_QUESTION) {
            set_aria_expanded(&question, false);
        }
    }
}
