//! Browser tests for the merchant catalog page: the reducer drives state,
//! the view layer turns it into DOM, and we assert on the DOM.
//!
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use storefront_frontend::constants::{
    ADD_PRODUCT_MODAL_ID, CONFIRMATION_BANNER_ID, PRODUCT_ADDED_MESSAGE, PRODUCT_GRID_ID,
};
use storefront_frontend::messages::{Command, Message, ViewRegion};
use storefront_frontend::models::{Product, ProductImage};
use storefront_frontend::routes::Route;
use storefront_frontend::state::AppState;
use storefront_frontend::update::update;
use storefront_frontend::views::render_region;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Apply a message and replay its render commands against the DOM, the way
/// the executor would.
fn apply(state: &mut AppState, msg: Message) -> Vec<Command> {
    let commands = update(state, msg);
    for cmd in &commands {
        if let Command::Render(region) = cmd {
            render_region(state, *region, &document()).expect("render");
        }
    }
    commands
}

fn card_ids(doc: &Document) -> Vec<String> {
    let nodes = doc
        .query_selector_all(&format!("#{} .product-card", PRODUCT_GRID_ID))
        .unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(n).ok())
        .filter_map(|e| e.get_attribute("data-product-id"))
        .collect()
}

fn remote(id: u32, title: &str, rating: u8) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: "1500".to_string(),
        image: Some(ProductImage::Remote(format!("https://cdn.test/{}.jpg", id))),
        rating,
    }
}

#[wasm_bindgen_test]
fn fetched_products_render_in_response_order() {
    let doc = document();
    let mut state = AppState::new();
    let cmds = apply(&mut state, Message::MountPage(Route::Merchant));
    let generation = match cmds.first() {
        Some(Command::FetchProducts { generation }) => *generation,
        other => panic!("expected fetch first, got {:?}", other),
    };

    apply(
        &mut state,
        Message::ProductsLoaded {
            generation,
            products: vec![remote(3, "Cap", 2), remote(1, "Mug", 5), remote(2, "Lamp", 4)],
        },
    );

    assert_eq!(card_ids(&doc), vec!["3", "1", "2"]);

    let first_price = doc
        .query_selector(&format!("#{} .product-card .product-price", PRODUCT_GRID_ID))
        .unwrap()
        .unwrap();
    assert_eq!(first_price.text_content().unwrap(), "₦ 1500");

    let filled = doc
        .query_selector_all("[data-product-id='3'] .star-filled")
        .unwrap()
        .length();
    let dim = doc
        .query_selector_all("[data-product-id='3'] .star-dim")
        .unwrap()
        .length();
    assert_eq!((filled, dim), (2, 3));
}

#[wasm_bindgen_test]
fn failed_fetch_renders_an_empty_grid() {
    let doc = document();
    let mut state = AppState::new();
    apply(&mut state, Message::MountPage(Route::Merchant));
    let generation = state.catalog.fetch_generation;
    apply(
        &mut state,
        Message::ProductsLoadFailed { generation, error: "API request failed: 500".into() },
    );

    assert!(doc.get_element_by_id(PRODUCT_GRID_ID).is_some());
    assert!(card_ids(&doc).is_empty());
}

#[wasm_bindgen_test]
fn adding_a_product_closes_modal_and_confirms() {
    let doc = document();
    let mut state = AppState::new();
    apply(&mut state, Message::MountPage(Route::Merchant));
    let generation = state.catalog.fetch_generation;
    apply(&mut state, Message::ProductsLoaded { generation, products: vec![remote(1, "Mug", 5)] });

    apply(&mut state, Message::ToggleAddProductModal);
    let modal = doc.get_element_by_id(ADD_PRODUCT_MODAL_ID).unwrap();
    assert!(modal.class_list().contains("visible"));

    apply(&mut state, Message::DraftNameChanged("Widget".into()));
    apply(&mut state, Message::DraftPriceChanged("9.99".into()));
    apply(&mut state, Message::DraftImageReady("blob:widget".into()));
    apply(&mut state, Message::SubmitNewProduct);

    assert_eq!(card_ids(&doc), vec!["1", "2"]);
    assert!(modal.class_list().contains("hidden"));

    let banner = doc.get_element_by_id(CONFIRMATION_BANNER_ID).unwrap();
    assert_eq!(banner.text_content().unwrap(), PRODUCT_ADDED_MESSAGE);
    assert!(banner.class_list().contains("visible"));

    // Toggling again hides the confirmation.
    apply(&mut state, Message::ToggleAddProductModal);
    assert!(banner.class_list().contains("hidden"));
}

#[wasm_bindgen_test]
fn png_selection_requests_alert_only() {
    let mut state = AppState::new();
    apply(&mut state, Message::MountPage(Route::Merchant));
    apply(&mut state, Message::ToggleAddProductModal);

    let cmds = apply(&mut state, Message::DraftImageSelected { mime_type: Some("image/png".into()) });
    assert_eq!(cmds, vec![Command::Alert("Only JPG images are allowed.".into())]);
    assert!(state.catalog.draft.image.is_none());
    assert!(state.catalog.products.is_empty());
}

#[wasm_bindgen_test]
fn grid_region_is_ignored_on_other_pages() {
    let mut state = AppState::new();
    apply(&mut state, Message::MountPage(Route::Landing));
    assert!(render_region(&state, ViewRegion::ProductGrid, &document()).is_ok());
    assert!(document().get_element_by_id(PRODUCT_GRID_ID).is_none());
}
