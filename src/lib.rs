use wasm_bindgen::prelude::*;

// Export convenience macros crate-wide
#[macro_use]
mod macros;

pub mod command_executors;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod network;
pub mod pages;
pub mod reducers;
pub mod routes;
pub mod state;
pub mod update;
pub mod views;

use crate::messages::Message;
use crate::routes::Route;
use crate::state::{dispatch_global_message, APP_STATE};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    // Without API_BASE_URL or an api-base-url meta tag requests go same-origin.
    if let Err(e) = network::init_api_config() {
        debug_log!("API config not set at compile time ({}). Using same origin.", e);
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    views::ensure_page_root(&document)?;

    // Tear the page down when the document goes away so the catalog fetch
    // is aborted and blob: URLs are released.
    {
        let on_pagehide = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            dispatch_global_message(Message::TeardownPage);
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
        on_pagehide.forget();
    }

    // A page restored from the back/forward cache keeps its DOM but never
    // re-runs start(), so mount it again.
    {
        let on_pageshow = Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                debug_log!("Restored from back/forward cache, remounting");
                mount_current_route();
            }
        }) as Box<dyn FnMut(_)>);
        window.add_event_listener_with_callback("pageshow", on_pageshow.as_ref().unchecked_ref())?;
        on_pageshow.forget();
    }

    mount_current_route();

    Ok(())
}

fn mount_current_route() {
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    let route = Route::from_path(&path);
    debug_log!("Mounting {:?} for path {}", route, path);
    dispatch_global_message(Message::MountPage(route));
}

/// Current catalog as plain JS objects, for poking at from the devtools
/// console.
#[wasm_bindgen]
pub fn debug_catalog_snapshot() -> Result<JsValue, JsValue> {
    let products = APP_STATE.with(|s| s.borrow().catalog.products.clone());
    serde_wasm_bindgen::to_value(&products).map_err(|e| JsValue::from_str(&e.to_string()))
}
