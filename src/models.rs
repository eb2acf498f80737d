use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::MAX_RATING;

/// Where a product picture comes from.
///
/// `Remote` URLs arrive from the products endpoint and stay valid across
/// reloads.  `Local` holds a `blob:` object URL minted for a file picked in
/// this tab; it dies with the page and must never be sent anywhere.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProductImage {
    Remote(String),
    Local(String),
}

impl ProductImage {
    pub fn src(&self) -> &str {
        match self {
            ProductImage::Remote(url) | ProductImage::Local(url) => url,
        }
    }
}

impl<'de> Deserialize<'de> for ProductImage {
    // Anything coming over the wire is by definition a remote URL.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ProductImage::Remote)
    }
}

/// A catalog entry as rendered on the merchant page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(deserialize_with = "price_as_text")]
    pub price: String,
    #[serde(default)]
    pub image: Option<ProductImage>,
    #[serde(default, deserialize_with = "rating_in_range")]
    pub rating: u8,
}

impl Product {
    /// Rating clamped into the range the star row can show.
    pub fn display_rating(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }
}

/// Transient state of the "Add New Product" form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewProductDraft {
    pub name: String,
    pub price: String,
    pub image: Option<ProductImage>,
}

/// Accept `"9.99"` as well as `9.99` and keep the textual form.
fn price_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawPrice::deserialize(deserializer)? {
        RawPrice::Text(s) => s,
        RawPrice::Number(n) => n.to_string(),
    })
}

/// Any JSON number (or null) becomes a whole star count in `0..=MAX_RATING`.
fn rating_in_range<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<f64>::deserialize(deserializer)?;
    Ok(match raw {
        Some(r) if r.is_finite() => r.round().clamp(0.0, f64::from(MAX_RATING)) as u8,
        _ => 0,
    })
}
