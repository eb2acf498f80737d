use std::fmt;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Headers, Request, RequestInit, RequestMode, Response};

use crate::constants::PRODUCTS_ENDPOINT;
use crate::models::Product;

/// Why a request to the storefront API did not produce usable data.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    Network(String),
    Status { status: u16, status_text: String },
    Decode(String),
    Aborted,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status { status, status_text } => {
                write!(f, "API request failed: {} {}", status, status_text)
            }
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
            ApiError::Aborted => write!(f, "request aborted"),
        }
    }
}

impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// REST client for the storefront backend
pub struct ApiClient;

impl ApiClient {
    fn url(path: &str) -> String {
        super::api_config().url(path)
    }

    /// Fetch the merchant's catalog.  Order of the response is preserved.
    pub async fn get_products(signal: Option<&AbortSignal>) -> Result<Vec<Product>, ApiError> {
        let url = Self::url(PRODUCTS_ENDPOINT);
        let body = Self::fetch_json(&url, signal).await?;
        let (products, rejected) = Self::decode_products(&body)?;
        for reason in rejected {
            web_sys::console::warn_1(&format!("Skipping product record: {}", reason).into());
        }
        Ok(products)
    }

    /// Decode the catalog record by record.  A malformed record is skipped
    /// and reported in the second half of the result; only a body that is
    /// not a JSON array fails as a whole.
    pub(crate) fn decode_products(body: &str) -> Result<(Vec<Product>, Vec<String>), ApiError> {
        let records: Vec<serde_json::Value> =
            serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

        let mut products = Vec::with_capacity(records.len());
        let mut rejected = Vec::new();
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<Product>(record) {
                Ok(product) => products.push(product),
                Err(e) => rejected.push(format!("#{}: {}", index, e)),
            }
        }
        Ok((products, rejected))
    }

    // GET `url` expecting a JSON body, returned as text.
    async fn fetch_json(url: &str, signal: Option<&AbortSignal>) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        opts.set_signal(signal);

        let headers = Headers::new().map_err(network_error)?;
        headers.append("Accept", "application/json").map_err(network_error)?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no global window".into()))?;
        let resp_value = match JsFuture::from(window.fetch_with_request(&request)).await {
            Ok(v) => v,
            Err(_) if signal.map(|s| s.aborted()).unwrap_or(false) => return Err(ApiError::Aborted),
            Err(e) => return Err(network_error(e)),
        };
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status(),
                status_text: resp.status_text(),
            });
        }

        // Parse body as text – caller decodes JSON.
        let text_promise = resp.text().map_err(network_error)?;
        let text = match JsFuture::from(text_promise).await {
            Ok(t) => t,
            Err(_) if signal.map(|s| s.aborted()).unwrap_or(false) => return Err(ApiError::Aborted),
            Err(e) => return Err(network_error(e)),
        };
        Ok(text.as_string().unwrap_or_default())
    }
}

fn network_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_product_array_in_order() {
        let body = r#"[
            {"id":2,"title":"Cap","price":"10","image":"https://cdn.test/cap.jpg","rating":3},
            {"id":1,"name":"Mug","price":1500,"image":null,"rating":5}
        ]"#;
        let (products, rejected) = ApiClient::decode_products(body).unwrap();
        assert!(rejected.is_empty());
        let titles: Vec<_> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Cap", "Mug"]);
        assert_eq!(products[1].price, "1500");
    }

    #[test]
    fn malformed_records_are_skipped_not_fatal() {
        let body = r#"[
            {"id":1,"title":"Mug","price":"1500","rating":4.0},
            {"id":2,"title":"Broken","price":null},
            {"title":"No id","price":"5"},
            {"id":4,"title":"Lamp","price":"20","rating":300}
        ]"#;
        let (products, rejected) = ApiClient::decode_products(body).unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(products[0].rating, 4);
        assert_eq!(products[1].rating, 5);
        assert_eq!(rejected.len(), 2);
        assert!(rejected[0].starts_with("#1:"));
        assert!(rejected[1].starts_with("#2:"));
    }

    #[test]
    fn non_array_body_is_a_decode_error() {
        let err = ApiClient::decode_products(r#"{"products":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn status_error_message() {
        let err = ApiError::Status { status: 503, status_text: "Service Unavailable".into() };
        assert_eq!(err.to_string(), "API request failed: 503 Service Unavailable");
    }
}
