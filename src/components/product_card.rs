//! One catalog card: picture, title, price, star row and a (not yet wired)
//! "Add to Cart" button.

use unicode_segmentation::UnicodeSegmentation;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CURRENCY_GLYPH, MAX_CARD_TITLE_GRAPHEMES, MAX_RATING, PRODUCT_PLACEHOLDER_SRC};
use crate::dom_utils::{el, img, text_el};
use crate::models::Product;

/// Price exactly as entered, prefixed with the shop currency.
pub fn format_price(price: &str) -> String {
    format!("{} {}", CURRENCY_GLYPH, price.trim())
}

/// `true` for each filled star, left to right.
pub fn star_states(rating: u8) -> [bool; MAX_RATING as usize] {
    let mut stars = [false; MAX_RATING as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        *star = i < rating as usize;
    }
    stars
}

/// Shorten long titles on grapheme boundaries so emoji and combining marks
/// never get split.
pub fn truncate_title(title: &str) -> String {
    let graphemes: Vec<&str> = title.graphemes(true).collect();
    if graphemes.len() <= MAX_CARD_TITLE_GRAPHEMES {
        return title.to_string();
    }
    let mut short: String = graphemes[..MAX_CARD_TITLE_GRAPHEMES - 1].concat();
    short.push('…');
    short
}

pub fn render_card(document: &Document, product: &Product) -> Result<Element, JsValue> {
    let card = el(document, "div", "product-card")?;
    card.set_attribute("data-product-id", &product.id.to_string())?;

    let frame = el(document, "div", "product-image")?;
    let src = product
        .image
        .as_ref()
        .map(|i| i.src())
        .unwrap_or(PRODUCT_PLACEHOLDER_SRC);
    let picture = img(document, src, &product.title, "")?;
    frame.append_child(&picture)?;
    card.append_child(&frame)?;

    let title = text_el(document, "h3", "product-title", &truncate_title(&product.title))?;
    title.set_attribute("title", &product.title)?;
    card.append_child(&title)?;

    let price = text_el(document, "p", "product-price", &format_price(&product.price))?;
    card.append_child(&price)?;

    let stars = el(document, "div", "product-rating")?;
    stars.set_attribute("aria-label", &format!("{} out of {}", product.display_rating(), MAX_RATING))?;
    for filled in star_states(product.display_rating()) {
        let class = if filled { "star star-filled" } else { "star star-dim" };
        let star = text_el(document, "span", class, "★")?;
        stars.append_child(&star)?;
    }
    card.append_child(&stars)?;

    let add = text_el(document, "button", "add-to-cart", "Add to Cart")?;
    add.set_attribute("type", "button")?;
    card.append_child(&add)?;

    Ok(card)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_gets_currency_glyph() {
        assert_eq!(format_price("9.99"), "₦ 9.99");
        assert_eq!(format_price(" 1500 "), "₦ 1500");
    }

    #[test]
    fn stars_fill_from_the_left() {
        assert_eq!(star_states(4), [true, true, true, true, false]);
        assert_eq!(star_states(0), [false; 5]);
        assert_eq!(star_states(5), [true; 5]);
    }

    #[test]
    fn long_titles_are_shortened_on_grapheme_boundaries() {
        let title = "👍🏽".repeat(80);
        let short = truncate_title(&title);
        assert_eq!(short.graphemes(true).count(), MAX_CARD_TITLE_GRAPHEMES);
        assert!(short.ends_with('…'));
        assert!(short.starts_with("👍🏽"));

        assert_eq!(truncate_title("Widget"), "Widget");
    }
}
