//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, ergonomic wrappers for element creation and show / hide so the
//! page builders don't repeat `create_element` + `set_class_name` chains.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlInputElement};

/// Remove the `hidden` class so the element becomes visible.
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1("hidden");
    let _ = el.class_list().add_1("visible");
}

/// Hide the element by toggling CSS classes.
pub fn hide(el: &Element) {
    let _ = el.class_list().remove_1("visible");
    let _ = el.class_list().add_1("hidden");
}

pub fn set_visible(el: &Element, visible: bool) {
    if visible {
        show(el);
    } else {
        hide(el);
    }
}

/// Create `<tag class="...">`.
pub fn el(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Create `<tag class="...">text</tag>`.  Text is set as text content, never
/// parsed as markup.
pub fn text_el(document: &Document, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(text));
    Ok(element)
}

/// `<a href>` wrapping whatever the caller appends.
pub fn link(document: &Document, href: &str, class: &str) -> Result<Element, JsValue> {
    let a = el(document, "a", class)?;
    a.set_attribute("href", href)?;
    Ok(a)
}

pub fn img(document: &Document, src: &str, alt: &str, class: &str) -> Result<Element, JsValue> {
    let image = el(document, "img", class)?;
    image.set_attribute("src", src)?;
    image.set_attribute("alt", alt)?;
    Ok(image)
}

/// Remove every child so the container can be rebuilt from state.
pub fn clear_children(container: &Element) {
    while let Some(child) = container.first_child() {
        let _ = container.remove_child(&child);
    }
}

/// Fetch an `<input>` element by id and cast it to `HtmlInputElement`.
pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlInputElement>().ok())
}

/// Attach a listener for the lifetime of the element.  The closure is
/// leaked on purpose: page fragments are rebuilt only on mount.
pub fn on_event<F>(target: &Element, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Read the current value of the `<input>` that fired `event`.
pub fn event_input_value(event: &Event) -> Option<String> {
    event
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Focus the first interactive element within the given container.
/// Returns true if an element was focused, false otherwise.
pub fn focus_first_interactive(container: &Element) -> bool {
    let focusable_selectors = [
        "input:not([disabled])",
        "button:not([disabled])",
        "a[href]",
    ];

    for selector in &focusable_selectors {
        if let Ok(Some(element)) = container.query_selector(selector) {
            if let Ok(html_element) = element.dyn_into::<HtmlElement>() {
                let _ = html_element.focus();
                return true;
            }
        }
    }
    false
}
