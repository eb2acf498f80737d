//! Browser tests for the landing and sign-up pages.

#![cfg(target_arch = "wasm32")]

use storefront_frontend::constants::{LANDING_HEADLINE, SIGNUP_FORM_ID};
use storefront_frontend::messages::{Command, Message};
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

fn mount(route: Route) -> AppState {
    let mut state = AppState::new();
    for cmd in update(&mut state, Message::MountPage(route)) {
        if let Command::Render(region) = cmd {
            render_region(&state, region, &document()).expect("render");
        }
    }
    state
}

fn hrefs(doc: &Document) -> Vec<String> {
    let links = doc.query_selector_all("#page-root a[href]").unwrap();
    (0..links.length())
        .filter_map(|i| links.item(i))
        .filter_map(|n| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(n).ok())
        .filter_map(|e| e.get_attribute("href"))
        .collect()
}

#[wasm_bindgen_test]
fn landing_links_to_registration_and_waitlist() {
    let doc = document();
    mount(Route::Landing);

    let h1 = doc.query_selector("#page-root h1").unwrap().unwrap();
    assert_eq!(h1.text_content().unwrap(), LANDING_HEADLINE);
    assert_eq!(hrefs(&doc), vec!["/choose-role", "/waitlist"]);
}

#[wasm_bindgen_test]
fn sign_up_form_skips_browser_validation() {
    let doc = document();
    mount(Route::SignUp);

    let form = doc.get_element_by_id(SIGNUP_FORM_ID).unwrap();
    assert!(form.has_attribute("novalidate"));
    assert_eq!(hrefs(&doc), vec!["/signin", "/forgot-password"]);
}

#[wasm_bindgen_test]
fn empty_sign_up_submission_redirects() {
    let mut state = mount(Route::SignUp);
    let cmds = update(&mut state, Message::SignUpSubmitted);
    assert_eq!(cmds, vec![Command::Navigate(Route::WaitlistSuccess)]);
}
