// src/views.rs
//
// Turns the current state into DOM, one region at a time.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::components::{add_product_modal, styles};
use crate::constants::{APP_CONTAINER_ID, PAGE_ROOT_ID};
use crate::dom_utils::{clear_children, el};
use crate::messages::ViewRegion;
use crate::pages;
use crate::routes::Route;
use crate::state::{AppState, APP_STATE};

/// Make sure `#app-container > #page-root` exists and return the page root.
pub fn ensure_page_root(document: &Document) -> Result<web_sys::Element, JsValue> {
    if let Some(root) = document.get_element_by_id(PAGE_ROOT_ID) {
        return Ok(root);
    }

    let container = match document.get_element_by_id(APP_CONTAINER_ID) {
        Some(c) => c,
        None => {
            let c = el(document, "div", "")?;
            c.set_id(APP_CONTAINER_ID);
            document
                .body()
                .ok_or_else(|| JsValue::from_str("document has no body"))?
                .append_child(&c)?;
            c
        }
    };

    let root = el(document, "div", "")?;
    root.set_id(PAGE_ROOT_ID);
    container.append_child(&root)?;
    Ok(root)
}

/// Render `region` of the active page from a read-only view of the state.
pub fn render_region(state: &AppState, region: ViewRegion, document: &Document) -> Result<(), JsValue> {
    let page = match state.active_page {
        Some(page) => page,
        None => return Ok(()),
    };

    match (region, page) {
        (ViewRegion::Page, _) => render_page(state, page, document),
        (ViewRegion::ProductGrid, Route::Merchant) => pages::merchant::refresh_grid(document, &state.catalog),
        (ViewRegion::Confirmation, Route::Merchant) => {
            pages::merchant::refresh_confirmation(document, &state.catalog)
        }
        (ViewRegion::AddProductModal, Route::Merchant) => add_product_modal::refresh(document, &state.catalog),
        // Catalog regions don't exist on the other pages.
        _ => Ok(()),
    }
}

fn render_page(state: &AppState, page: Route, document: &Document) -> Result<(), JsValue> {
    styles::ensure_styles(document)?;
    let root = ensure_page_root(document)?;
    clear_children(&root);
    root.set_attribute("data-page", page.path())?;

    match page {
        Route::SignUp => pages::sign_up::mount(document, &root),
        Route::Merchant => pages::merchant::mount(document, &root, &state.catalog),
        _ => pages::landing::mount(document, &root),
    }
}

/// Entry point used by the command executor.
pub fn render(region: ViewRegion) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    let result = APP_STATE.with(|state| render_region(&state.borrow(), region, &document));
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Failed to render {:?}: {:?}", region, e).into());
    }
}
