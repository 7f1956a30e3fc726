//! MoodTrack Browser Client
//!
//! WebAssembly module loaded by the server-rendered journal pages. On
//! `DOMContentLoaded` (or straight away if the document is already parsed)
//! it:
//!
//! - reveals the app and wires logout, except on the login/signup pages
//! - reports the browser timezone
//! - binds whichever of the mood, signup and login forms the page has
//!
//! # Architecture
//!
//! All behaviour lives in `moodtrack::FormController`; this crate supplies
//! the DOM-backed `Page`, the `fetch`-backed `Transport`, and the listener
//! wiring.

use std::rc::Rc;

use moodtrack::{Config, FormController};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

pub mod dom;
pub mod fetch;
pub mod listeners;
pub mod logging;

use dom::DomPage;
use fetch::FetchTransport;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    logging::init();

    let Some(page) = DomPage::new() else {
        web_sys::console::error_1(&"MoodTrack client needs a window and document".into());
        return Ok(());
    };

    if page.document().ready_state() != DocumentReadyState::Loading {
        return init(page);
    }

    let document = page.document().clone();
    let on_ready = Closure::once(move || {
        if let Err(e) = init(page) {
            web_sys::console::error_1(&e);
        }
    });
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();

    Ok(())
}

/// Bootstrap the page and attach its listeners
pub fn init(page: DomPage) -> Result<(), JsValue> {
    let mut config = Config::default();
    config.client.base_url = fetch::get_api_base();

    let controller = Rc::new(FormController::new(page, FetchTransport, &config));
    let bindings = controller.bootstrap();

    listeners::attach(controller, bindings)
}
