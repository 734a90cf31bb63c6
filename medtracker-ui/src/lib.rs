//! Browser side of the Medication Tracker page enhancements.
//!
//! Compiled to `wasm32` and loaded by the server-rendered pages. Runs once
//! the document is ready: applies the stored theme, wires the toggle button,
//! and rewrites UTC timestamps into the viewer's local time.

pub mod boot;
pub mod dom;
pub mod formatter;
pub mod storage;

pub use boot::{initialize_page, on_document_ready, read_page_config, EnhancedPage};
pub use dom::{WebDocument, WebElement};
pub use formatter::LocaleDateFormatter;
pub use storage::BrowserStore;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, page enhancements disabled");
        return;
    };

    on_document_ready(&document, |document| {
        let config = read_page_config(document);
        if let Err(e) = initialize_page(document, &config) {
            log::error!("Failed to initialize page enhancements: {}", e);
        }
    });
}
