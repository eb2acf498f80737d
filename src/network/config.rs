/// API route configuration
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApiConfig {
    // Empty means same-origin.
    base_url: String,
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at compile time.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get a full URL for an absolute API path such as `/api/products`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let cfg = ApiConfig::from_url("https://shop.example.com/ ");
        assert_eq!(cfg.url("/api/products"), "https://shop.example.com/api/products");
    }

    #[test]
    fn default_is_same_origin() {
        assert_eq!(ApiConfig::default().url("/api/products"), "/api/products");
    }
}
