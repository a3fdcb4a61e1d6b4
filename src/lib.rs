// Library root
// -----------
// This crate exposes the pieces of the Fake Store catalog client. The
// binary (`main.rs`) wires them together into the interactive CLI.
//
// Module responsibilities:
// - `config`: base endpoint and request timeout, built once at startup.
// - `error`: the error taxonomy every layer returns.
// - `api`: HTTP transport (`Fetcher` trait and the reqwest client).
// - `model`: product records and normalization of raw API records.
// - `catalog`: list-all and fetch-by-id operations.
// - `render`: text rendering of products and the product table.
// - `ui`: the menu loop.
pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod ui;

pub use api::{ApiClient, Fetcher};
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, CatalogResult};
pub use model::{normalize, Product, ProductId, RawRecord};

use tracing_subscriber::EnvFilter;

/// Install the process-wide log subscriber: timestamped, leveled lines on
/// stderr, `info` by default, overridable with `RUST_LOG`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
