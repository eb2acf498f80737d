// Re-export network modules
pub mod api_client;
pub mod config;

// Re-export commonly used items
pub use api_client::{ApiClient, ApiError};

use config::ApiConfig;
use lazy_static::lazy_static;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

const API_BASE_META: &str = "api-base-url";

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

/// Initialize the API configuration from the compile-time `API_BASE_URL`,
/// falling back to `<meta name="api-base-url">` in the host page.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new().or_else(|_| {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", API_BASE_META)).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"))
            .map(|url| ApiConfig::from_url(&url))
            .ok_or("neither API_BASE_URL nor an api-base-url meta tag is set")
    })?;
    store_config(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows pointing a prebuilt bundle at a different backend.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    store_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

fn store_config(config: ApiConfig) {
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Current configuration; same-origin when nothing was configured.
pub(crate) fn api_config() -> ApiConfig {
    API_CONFIG
        .read()
        .map(|guard| guard.clone().unwrap_or_default())
        .unwrap_or_default()
}
