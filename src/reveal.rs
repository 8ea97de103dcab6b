//! One-shot reveal-on-scroll animations.
//!
//! Marked elements get the `visible` class the first time at least 18% of
//! them enters the viewport (with the bottom edge pulled in 40px), then stop
//! being observed. Without IntersectionObserver support everything is made
//! visible up front.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::{self, qsa};

const VISIBLE_CLASS: &str = "visible";
const THRESHOLD: f64 = 0.18;
const ROOT_MARGIN: &str = "0px 0px -40px 0px";

pub fn init(document: &Document) {
    let elements = qsa(document, dom::REVEAL);
    if elements.is_empty() {
        return;
    }
    debug!("reveal: observing {} element(s)", elements.len());

    let Some(window) = web_sys::window() else {
        return;
    };
    if !observer_supported(&window) {
        mark_all_visible(&elements);
        return;
    }

    let on_intersect = Closure::wrap(Box::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)
        {
            Ok(observer) => observer,
            Err(_) => {
                mark_all_visible(&elements);
                return;
            }
        };
    on_intersect.forget();

    for element in &elements {
        observer.observe(element);
    }
}

fn observer_supported(window: &web_sys::Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("IntersectionObserver"))
        .unwrap_or(false)
}

fn mark_all_visible(elements: &[Element]) {
    for element in elements {
        let _ = element.class_list().add_1(VISIBLE_CLASS);
    }
}
