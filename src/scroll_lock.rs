//! Body-level scroll lock shared by the drawer and the privacy modal.
//!
//! Unlocking only takes effect once neither overlay reports itself open, so
//! closing one overlay while the other is still up keeps the page locked.

use web_sys::Document;

use crate::dom::{self, qs};

const LOCK_CLASS: &str = "lock-scroll";
const OPEN_CLASS: &str = "open";

pub fn lock(document: &Document) {
    if let Some(body) = document.body() {
        let _ = body.class_list().add_1(LOCK_CLASS);
    }
}

pub fn unlock(document: &Document) {
    if is_drawer_open(document) || is_modal_open(document) {
        return;
    }
    if let Some(body) = document.body() {
        let _ = body.class_list().remove_1(LOCK_CLASS);
    }
}

pub fn is_locked(document: &Document) -> bool {
    document
        .body()
        .map(|body| body.class_list().contains(LOCK_CLASS))
        .unwrap_or(false)
}

fn is_drawer_open(document: &Document) -> bool {
    has_open_class(document, dom::DRAWER)
}

fn is_modal_open(document: &Document) -> bool {
    has_open_class(document, dom::PRIVACY_MODAL)
}

fn has_open_class(document: &Document, selector: &str) -> bool {
    qs(document, selector)
        .map(|el| el.class_list().contains(OPEN_CLASS))
        .unwrap_or(false)
}
