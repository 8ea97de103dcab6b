//! Drop shadow on the fixed topbar once the page scrolls past 16px.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, HtmlElement};

use crate::dom::{self, qs};

const SHADOW: &str = "0 10px 20px rgba(24, 32, 40, 0.12)";
const SHADOW_OFFSET_PX: f64 = 16.0;

pub fn init(document: &Document) {
    let Some(topbar) = qs(document, dom::TOPBAR).and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };
    let Some(window) = web_sys::window() else {
        return;
    };
    debug!("topbar shadow armed");

    let update = {
        let window = window.clone();
        move || {
            let offset = window.scroll_y().unwrap_or(0.0);
            let _ = topbar
                .style()
                .set_property("box-shadow", shadow_for_offset(offset));
        }
    };
    update();

    let on_scroll = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    );
    on_scroll.forget();
}

fn shadow_for_offset(offset: f64) -> &'static str {
    if offset > SHADOW_OFFSET_PX {
        SHADOW
    } else {
        "none"
    }
}

#[cfg(test)]
mod tests {
    use super::{shadow_for_offset, SHADOW};

    #[test]
    fn shadow_only_past_threshold() {
        assert_eq!(shadow_for_offset(0.0), "none");
        assert_eq!(shadow_for_offset(16.0), "none");
        assert_eq!(shadow_for_offset(16.1), SHADOW);
        assert_eq!(shadow_for_offset(400.0), SHADOW);
    }
}
