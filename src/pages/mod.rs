// src/pages/mod.rs
//
// Top-level pages.  Each one builds its DOM from scratch on mount into the
// shared `#page-root` container.

pub mod landing;
pub mod merchant;
pub mod sign_up;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, MouseEvent};

use crate::dom_utils::{link, on_event};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::dispatch_global_message;

/// `<a href>` to `route` whose plain left-clicks are dispatched as
/// `Message::Navigate`. The page itself is torn down by the `pagehide`
/// listener once the document unloads. Modified clicks (new tab, new window)
/// are left to the browser.
pub(crate) fn nav_link(document: &Document, route: Route, class: &str) -> Result<Element, JsValue> {
    let a = link(document, route.path(), class)?;
    on_event(&a, "click", move |e| {
        let modified = e
            .dyn_ref::<MouseEvent>()
            .map(|m| m.ctrl_key() || m.meta_key() || m.shift_key() || m.button() != 0)
            .unwrap_or(false);
        if !modified {
            e.prevent_default();
            dispatch_global_message(Message::Navigate(route));
        }
    })?;
    Ok(a)
}
