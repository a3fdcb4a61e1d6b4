// Configuration: where the catalog lives and how long we wait for it.
// Built once in `main` and handed to the components that need it.

use std::time::Duration;

use crate::error::CatalogError;

/// Endpoint used when `FAKESTORE_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.escuelajs.co/api/v1/products";

/// Per-request timeout used when `FAKESTORE_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
    timeout: Duration,
}

impl Config {
    /// Configuration for `base_url` with the default 5 second timeout.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read the configuration from `FAKESTORE_API_URL` and
    /// `FAKESTORE_TIMEOUT_SECS`, falling back to the defaults.
    pub fn from_env() -> Result<Self, CatalogError> {
        let base_url =
            std::env::var("FAKESTORE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = std::env::var("FAKESTORE_TIMEOUT_SECS").ok();
        Self::from_parts(&base_url, timeout.as_deref())
    }

    fn from_parts(base_url: &str, timeout_secs: Option<&str>) -> Result<Self, CatalogError> {
        if base_url.trim().is_empty() {
            return Err(CatalogError::InvalidArgument(
                "the API base URL cannot be empty".into(),
            ));
        }
        let config = Self::new(base_url.trim());
        match timeout_secs {
            None => Ok(config),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(config.with_timeout(Duration::from_secs(secs))),
                _ => Err(CatalogError::InvalidArgument(format!(
                    "FAKESTORE_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                ))),
            },
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL of the full product listing.
    pub fn collection_url(&self) -> String {
        self.base_url.clone()
    }

    /// URL of a single product.
    pub fn item_url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url)
    }
}
