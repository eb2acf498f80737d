// src/pages/sign_up.rs
//
// Sign-up form.  Submitting always redirects to the waitlist confirmation;
// the email/password values are tracked in state but not sent anywhere.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use super::nav_link;
use crate::constants::{LOGO_SRC, SIGNUP_EMAIL_INPUT_ID, SIGNUP_FORM_ID, SIGNUP_PASSWORD_INPUT_ID};
use crate::dom_utils::{el, event_input_value, img, on_event, text_el};
use crate::messages::Message;
use crate::routes::Route;
use crate::state::dispatch_global_message;

pub fn mount(document: &Document, root: &Element) -> Result<(), JsValue> {
    let main = el(document, "main", "signup")?;

    let logo = el(document, "div", "signup-logo")?;
    let logo_img = img(document, LOGO_SRC, "Logo", "")?;
    logo.append_child(&logo_img)?;
    main.append_child(&logo)?;

    let card = el(document, "div", "signup-card")?;
    let heading = text_el(document, "h1", "", "Sign Up")?;
    card.append_child(&heading)?;

    // Decorative for now: no OAuth flow behind them.
    let social = el(document, "div", "social-row")?;
    for label in ["Sign up with Google", "Sign up with Facebook"] {
        let button = text_el(document, "button", "social-button", label)?;
        button.set_attribute("type", "button")?;
        social.append_child(&button)?;
    }
    card.append_child(&social)?;

    let form = el(document, "form", "")?;
    form.set_id(SIGNUP_FORM_ID);
    // Any input, including an empty or malformed email, must reach the handler.
    form.set_attribute("novalidate", "")?;

    let email = input_field(document, &form, "Email", SIGNUP_EMAIL_INPUT_ID, "email", "Enter your email")?;
    on_event(&email, "input", |e| {
        if let Some(v) = event_input_value(&e) {
            dispatch_global_message(Message::SignUpEmailChanged(v));
        }
    })?;

    let password = input_field(
        document,
        &form,
        "Password",
        SIGNUP_PASSWORD_INPUT_ID,
        "password",
        "Enter your password",
    )?;
    on_event(&password, "input", |e| {
        if let Some(v) = event_input_value(&e) {
            dispatch_global_message(Message::SignUpPasswordChanged(v));
        }
    })?;

    let submit = text_el(document, "button", "primary-button", "Sign Up")?;
    submit.set_attribute("type", "submit")?;
    form.append_child(&submit)?;

    on_event(&form, "submit", |e| {
        e.prevent_default();
        dispatch_global_message(Message::SignUpSubmitted);
    })?;
    card.append_child(&form)?;

    let footer = el(document, "div", "signup-links")?;
    let login_line = text_el(document, "p", "", "Already have an account? ")?;
    let login = nav_link(document, Route::SignIn, "")?;
    login.set_text_content(Some("Login"));
    login_line.append_child(&login)?;
    footer.append_child(&login_line)?;

    let forgot = nav_link(document, Route::ForgotPassword, "")?;
    let forgot_text = text_el(document, "p", "", "Forgot Password?")?;
    forgot.append_child(&forgot_text)?;
    footer.append_child(&forgot)?;
    card.append_child(&footer)?;

    main.append_child(&card)?;
    root.append_child(&main)?;
    Ok(())
}

fn input_field(
    document: &Document,
    form: &Element,
    label: &str,
    id: &str,
    input_type: &str,
    placeholder: &str,
) -> Result<Element, JsValue> {
    let wrapper = el(document, "div", "form-field")?;
    let label_el = text_el(document, "label", "", label)?;
    label_el.set_attribute("for", id)?;
    wrapper.append_child(&label_el)?;

    let input = el(document, "input", "")?;
    input.set_id(id);
    input.set_attribute("type", input_type)?;
    input.set_attribute("placeholder", placeholder)?;
    wrapper.append_child(&input)?;

    form.append_child(&wrapper)?;
    Ok(input)
}
