// src/pages/landing.rs
//
// Marketing landing page.  Static; the only behaviour is the two links.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::nav_link;
use crate::constants::{LANDING_BLURB, LANDING_FOOTER, LANDING_HEADLINE, LANDING_VISUAL_SRC, LOGO_SRC};
use crate::dom_utils::{el, img, text_el};
use crate::routes::Route;

pub fn mount(document: &Document, root: &Element) -> Result<(), JsValue> {
    let main = el(document, "main", "landing")?;
    let body = el(document, "div", "landing-body")?;

    // Copy + calls to action
    let copy = el(document, "div", "landing-copy")?;
    let headline = text_el(document, "h1", "", LANDING_HEADLINE)?;
    copy.append_child(&headline)?;
    let blurb = text_el(document, "p", "", LANDING_BLURB)?;
    copy.append_child(&blurb)?;

    let actions = el(document, "div", "landing-actions")?;
    for (route, label) in [(Route::ChooseRole, "Sign Up"), (Route::Waitlist, "Sign In")] {
        let a = nav_link(document, route, "")?;
        let button = text_el(document, "button", "pill-button", label)?;
        a.append_child(&button)?;
        actions.append_child(&a)?;
    }
    copy.append_child(&actions)?;
    body.append_child(&copy)?;

    let divider = el(document, "div", "landing-divider")?;
    let logo = img(document, LOGO_SRC, "Logo", "")?;
    divider.append_child(&logo)?;
    body.append_child(&divider)?;

    let visual = el(document, "div", "landing-visual")?;
    let hero = img(document, LANDING_VISUAL_SRC, "Landing visual", "")?;
    visual.append_child(&hero)?;
    body.append_child(&visual)?;

    main.append_child(&body)?;
    let footer = text_el(document, "footer", "landing-footer", LANDING_FOOTER)?;
    main.append_child(&footer)?;

    root.append_child(&main)?;
    Ok(())
}
