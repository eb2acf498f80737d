// src/pages/merchant.rs
//
// Merchant catalog page: top bar, static profile sidebar, product grid and
// the add-product modal.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::nav_link;
use crate::components::{add_product_modal, product_card};
use crate::constants::{
    ADD_PRODUCT_TOGGLE_ID, CONFIRMATION_BANNER_ID, LOGO_SRC, MERCHANT_BLURB, MERCHANT_DISPLAY_NAME,
    PRODUCT_GRID_ID, PROFILE_AVATAR_SRC,
};
use crate::dom_utils::{clear_children, el, img, on_event, set_visible, text_el};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::{dispatch_global_message, CatalogState};

pub fn mount(document: &Document, root: &Element, catalog: &CatalogState) -> Result<(), JsValue> {
    let page = el(document, "div", "gradient-bg merchant")?;

    let bar = top_bar(document)?;
    page.append_child(&bar)?;

    let body = el(document, "div", "merchant-body")?;
    let sidebar = profile_sidebar(document)?;
    body.append_child(&sidebar)?;

    let main = el(document, "div", "catalog")?;
    let banner = el(document, "div", "confirmation-banner")?;
    banner.set_id(CONFIRMATION_BANNER_ID);
    banner.set_attribute("role", "status")?;
    main.append_child(&banner)?;

    let grid = el(document, "div", "product-grid")?;
    grid.set_id(PRODUCT_GRID_ID);
    main.append_child(&grid)?;
    body.append_child(&main)?;
    page.append_child(&body)?;

    root.append_child(&page)?;

    add_product_modal::mount(document, &page)?;

    refresh_grid(document, catalog)?;
    refresh_confirmation(document, catalog)?;
    add_product_modal::refresh(document, catalog)?;
    Ok(())
}

fn top_bar(document: &Document) -> Result<Element, JsValue> {
    let bar = el(document, "div", "top-bar")?;

    let home = nav_link(document, Route::Landing, "logo-link")?;
    let logo = img(document, LOGO_SRC, "Logo", "")?;
    home.append_child(&logo)?;
    bar.append_child(&home)?;

    // Search is presentational until there is a search backend.
    let search = el(document, "div", "search-box")?;
    let input = el(document, "input", "")?;
    input.set_attribute("type", "text")?;
    input.set_attribute("placeholder", "Search...")?;
    input.set_attribute("aria-label", "Search")?;
    search.append_child(&input)?;
    bar.append_child(&search)?;

    let actions = el(document, "div", "top-actions")?;
    let cart = text_el(document, "span", "cart-badge", "🛒 Cart")?;
    actions.append_child(&cart)?;

    let toggle = text_el(document, "button", "add-toggle", "⊕")?;
    toggle.set_id(ADD_PRODUCT_TOGGLE_ID);
    toggle.set_attribute("type", "button")?;
    toggle.set_attribute("aria-label", "Add product")?;
    on_event(&toggle, "click", |_| dispatch_global_message(Message::ToggleAddProductModal))?;
    actions.append_child(&toggle)?;
    bar.append_child(&actions)?;

    Ok(bar)
}

fn profile_sidebar(document: &Document) -> Result<Element, JsValue> {
    let aside = el(document, "aside", "profile-sidebar")?;
    let avatar = img(document, PROFILE_AVATAR_SRC, "Profile", "")?;
    aside.append_child(&avatar)?;
    let name = text_el(document, "h2", "", MERCHANT_DISPLAY_NAME)?;
    aside.append_child(&name)?;
    let blurb = text_el(document, "p", "", MERCHANT_BLURB)?;
    aside.append_child(&blurb)?;

    let social = el(document, "div", "social-icons")?;
    for name in ["Instagram", "WhatsApp", "Facebook"] {
        let icon = text_el(document, "span", "social-icon", name)?;
        icon.set_attribute("aria-label", name)?;
        social.append_child(&icon)?;
    }
    aside.append_child(&social)?;
    Ok(aside)
}

/// Rebuild every card from the current list.
pub fn refresh_grid(document: &Document, catalog: &CatalogState) -> Result<(), JsValue> {
    let grid = match document.get_element_by_id(PRODUCT_GRID_ID) {
        Some(g) => g,
        None => return Ok(()),
    };
    clear_children(&grid);
    for product in &catalog.products {
        let card = product_card::render_card(document, product)?;
        grid.append_child(&card)?;
    }
    Ok(())
}

pub fn refresh_confirmation(document: &Document, catalog: &CatalogState) -> Result<(), JsValue> {
    if let Some(banner) = document.get_element_by_id(CONFIRMATION_BANNER_ID) {
        banner.set_text_content(catalog.confirmation.as_deref());
        set_visible(&banner, catalog.confirmation.is_some());
    }
    Ok(())
}
