// Catalog operations: the two reads the shell offers, built on a `Fetcher`
// and the normalizer.

use serde_json::Value;
use tracing::{info, warn};

use crate::api::Fetcher;
use crate::config::Config;
use crate::error::{CatalogError, CatalogResult};
use crate::model::{normalize, Product, RawRecord};

pub struct Catalog<F> {
    fetcher: F,
    config: Config,
}

impl<F: Fetcher> Catalog<F> {
    pub fn new(fetcher: F, config: Config) -> Self {
        Catalog { fetcher, config }
    }

    /// Fetch the full listing.
    ///
    /// Records come back raw: each one is normalized when its row is
    /// rendered, so one bad record does not sink the whole listing.
    pub fn fetch_all(&self) -> CatalogResult<Vec<RawRecord>> {
        info!("fetching the full product list");
        let records = match self.fetcher.fetch(&self.config.collection_url())? {
            Value::Array(records) => records,
            _ => {
                warn!("catalog response is not a list");
                return Err(CatalogError::InvalidResponseShape);
            }
        };
        if records.is_empty() {
            warn!("catalog is empty");
            return Err(CatalogError::EmptyCatalog);
        }
        info!(count = records.len(), "fetched product list");
        Ok(records)
    }

    /// Fetch and normalize a single product. `id` must be a non-empty
    /// string of ASCII digits; anything else fails before any request.
    pub fn fetch_by_id(&self, id: &str) -> CatalogResult<Product> {
        if !is_valid_id(id) {
            warn!(id, "rejected product id");
            return Err(CatalogError::InvalidArgument(
                "the ID must be a non-negative integer".into(),
            ));
        }
        info!(id, "fetching product");
        let raw = self.fetcher.fetch(&self.config.item_url(id))?;
        let product = normalize(&raw).map_err(|e| {
            warn!(id, error = %e, "product record rejected");
            e
        })?;
        info!(id, "fetched product");
        Ok(product)
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}
