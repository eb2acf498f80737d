//! "Add New Product" modal on the merchant page.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlInputElement};

use crate::components::modal;
use crate::constants::{
    ACCEPTED_IMAGE_MIME, ADD_PRODUCT_FORM_ID, ADD_PRODUCT_MODAL_ID, PRODUCT_IMAGE_INPUT_ID,
    PRODUCT_NAME_INPUT_ID, PRODUCT_PRICE_INPUT_ID,
};
use crate::dom_utils::{el, event_input_value, input_by_id, on_event, text_el};
use crate::messages::Message;
use crate::state::{dispatch_global_message, CatalogState};

/// Build the modal (hidden) inside `parent`.
pub fn mount(document: &Document, parent: &Element) -> Result<(), JsValue> {
    let (_, content) = modal::ensure_modal(document, parent, ADD_PRODUCT_MODAL_ID)?;
    content.set_attribute("role", "dialog")?;
    content.set_attribute("aria-modal", "true")?;

    let header = el(document, "div", "modal-header")?;
    let title = text_el(document, "h2", "", "Add New Product")?;
    header.append_child(&title)?;
    let close = text_el(document, "button", "modal-close", "X")?;
    close.set_attribute("type", "button")?;
    close.set_attribute("aria-label", "Close")?;
    on_event(&close, "click", |_| dispatch_global_message(Message::ToggleAddProductModal))?;
    header.append_child(&close)?;
    content.append_child(&header)?;

    let form = el(document, "form", "")?;
    form.set_id(ADD_PRODUCT_FORM_ID);

    let name = field(document, &form, "Product Name", PRODUCT_NAME_INPUT_ID, "text")?;
    on_event(&name, "input", |e| {
        if let Some(v) = event_input_value(&e) {
            dispatch_global_message(Message::DraftNameChanged(v));
        }
    })?;

    let price = field(document, &form, "Price", PRODUCT_PRICE_INPUT_ID, "number")?;
    price.set_attribute("step", "any")?;
    on_event(&price, "input", |e| {
        if let Some(v) = event_input_value(&e) {
            dispatch_global_message(Message::DraftPriceChanged(v));
        }
    })?;

    let image = field(document, &form, "Image", PRODUCT_IMAGE_INPUT_ID, "file")?;
    image.set_attribute("accept", ACCEPTED_IMAGE_MIME)?;
    on_event(&image, "change", |e| {
        let mime_type = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0))
            .map(|file| file.type_());
        dispatch_global_message(Message::DraftImageSelected { mime_type });
    })?;

    let submit = text_el(document, "button", "primary-button", "Add Product")?;
    submit.set_attribute("type", "submit")?;
    form.append_child(&submit)?;

    on_event(&form, "submit", |e| {
        e.prevent_default();
        dispatch_global_message(Message::SubmitNewProduct);
    })?;

    content.append_child(&form)?;
    Ok(())
}

fn field(
    document: &Document,
    form: &Element,
    label: &str,
    id: &str,
    input_type: &str,
) -> Result<Element, JsValue> {
    let wrapper = el(document, "div", "form-field")?;
    let label_el = text_el(document, "label", "", label)?;
    label_el.set_attribute("for", id)?;
    wrapper.append_child(&label_el)?;

    let input = el(document, "input", "")?;
    input.set_id(id);
    input.set_attribute("type", input_type)?;
    input.set_attribute("name", id)?;
    input.set_attribute("required", "")?;
    wrapper.append_child(&input)?;

    form.append_child(&wrapper)?;
    Ok(input)
}

/// Sync visibility with state.  Opening mirrors the (fresh) draft into the
/// inputs, which is what makes the form start empty each time.
pub fn refresh(document: &Document, catalog: &CatalogState) -> Result<(), JsValue> {
    let backdrop = match document.get_element_by_id(ADD_PRODUCT_MODAL_ID) {
        Some(b) => b,
        None => return Ok(()),
    };

    if catalog.modal_open {
        if let Some(input) = input_by_id(document, PRODUCT_NAME_INPUT_ID) {
            input.set_value(&catalog.draft.name);
        }
        if let Some(input) = input_by_id(document, PRODUCT_PRICE_INPUT_ID) {
            input.set_value(&catalog.draft.price);
        }
        if catalog.draft.image.is_none() {
            if let Some(input) = input_by_id(document, PRODUCT_IMAGE_INPUT_ID) {
                input.set_value("");
            }
        }
        modal::show(&backdrop);
    } else {
        modal::hide(&backdrop);
    }
    Ok(())
}
