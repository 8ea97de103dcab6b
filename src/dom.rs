//! Marker selectors the static markup provides, plus small query helpers.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

pub const LANG_SWITCHER: &str = "[data-lang-switcher]";
pub const LANG_TOGGLE: &str = "[data-lang-toggle]";
pub const LANG_MENU: &str = "[data-lang-menu]";
pub const BURGER: &str = "[data-burger]";
pub const DRAWER: &str = "[data-drawer]";
pub const DRAWER_BACKDROP: &str = "[data-drawer-backdrop]";
pub const DRAWER_CLOSE: &str = "[data-drawer-close]";
pub const PRIVACY_OPEN: &str = "[data-privacy-open]";
pub const PRIVACY_MODAL: &str = "[data-privacy-modal]";
pub const PRIVACY_OVERLAY: &str = "[data-privacy-overlay]";
pub const PRIVACY_CLOSE: &str = "[data-privacy-close]";
pub const FAQ_ITEM: &str = ".faq-item";
pub const FAQ_QUESTION: &str = ".faq-question";
pub const REVEAL: &str = ".reveal";
pub const LEAD_FORM: &str = "[data-lead-form]";
pub const FORM_NOTE: &str = "[data-form-note]";
pub const TOPBAR: &str = ".topbar";

pub fn qs(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn qs_within(scope: &Element, selector: &str) -> Option<Element> {
    scope.query_selector(selector).ok().flatten()
}

pub fn qsa(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(node_list_to_elements)
        .unwrap_or_default()
}

pub fn qsa_within(scope: &Element, selector: &str) -> Vec<Element> {
    scope
        .query_selector_all(selector)
        .map(node_list_to_elements)
        .unwrap_or_default()
}

fn node_list_to_elements(list: web_sys::NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_aria_expanded(el: &Element, expanded: bool) {
    let _ = el.set_attribute("aria-expanded", if expanded { "true" } else { "false" });
}
