// Transport: one blocking HTTP GET per fetch, decoded as JSON.
// `Fetcher` is the seam the catalog operations are written against; the
// real implementation is `ApiClient`, tests plug in their own.

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::Config;
use crate::error::{CatalogError, CatalogResult};

/// Fetches a JSON document (object or array) from a URL.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> CatalogResult<Value>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> CatalogResult<Value> {
        (**self).fetch(url)
    }
}

/// reqwest-backed client with a fixed per-request timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                error!(error = %e, "failed to build HTTP client");
                CatalogError::Unexpected(format!("failed to build HTTP client: {e}"))
            })?;
        Ok(ApiClient { client })
    }
}

impl Fetcher for ApiClient {
    fn fetch(&self, url: &str) -> CatalogResult<Value> {
        if url.is_empty() {
            error!("refusing to fetch an empty URL");
            return Err(CatalogError::InvalidArgument("the URL cannot be empty".into()));
        }

        debug!(%url, "GET");
        let res = self
            .client
            .get(url)
            .send()
            .map_err(|e| classify(url, e))?;

        let status = res.status();
        if !status.is_success() {
            error!(%url, status = status.as_u16(), "request failed");
            return Err(CatalogError::HttpError {
                status: status.as_u16(),
            });
        }

        let body = res.text().map_err(|e| classify(url, e))?;
        serde_json::from_str(&body).map_err(|e| {
            error!(%url, error = %e, "response body is not valid JSON");
            CatalogError::DecodeError(e.to_string())
        })
    }
}

/// Map a reqwest failure onto the taxonomy, logging it once.
fn classify(url: &str, e: reqwest::Error) -> CatalogError {
    if e.is_timeout() {
        error!(%url, "request timed out");
        CatalogError::Timeout { url: url.into() }
    } else if e.is_connect() {
        error!(%url, error = %e, "connection failed");
        CatalogError::ConnectionFailure { url: url.into() }
    } else if e.is_decode() {
        error!(%url, error = %e, "could not read response body");
        CatalogError::DecodeError(e.to_string())
    } else {
        error!(%url, error = %e, "unexpected transport error");
        CatalogError::Unexpected(e.to_string())
    }
}
