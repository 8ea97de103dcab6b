use std::cell::RefCell;
use std::rc::Rc;

use log::{info, Level};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod dom;
pub mod drawer;
pub mod faq;
pub mod focus_trap;
pub mod lang_menu;
pub mod lead_form;
pub mod modal;
pub mod reveal;
pub mod scroll_lock;
pub mod topbar;

use focus_trap::FocusTrap;

/// Wires every controller against `document`. Each controller checks for its
/// own markup and stays inert when it is missing, so calling this on a page
/// that only has some of the widgets is fine.
pub fn init(document: &Document) {
    // Drawer and modal share one trap so opening either replaces whatever
    // trap was active before.
    let trap = Rc::new(RefCell::new(FocusTrap::new()));

    lang_menu::init(document);
    drawer::init(document, &trap);
    modal::init(document, &trap);
    faq::init(document);
    reveal::init(document);
    lead_form::init(document);
    topbar::init(document);
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    // The module is loaded deferred, so the document is already parsed here.
    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("no document to enhance");
    init(&document);
    info!("page enhancements ready");
}
