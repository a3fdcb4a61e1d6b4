//! Error taxonomy shared by every layer of the client.
//!
//! Transport and normalization failures travel upward unchanged; the shell
//! is the only place that turns them into user-facing text via
//! [`CatalogError::user_message`].

use thiserror::Error;

pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Caller supplied an unusable argument (empty URL, non-numeric id, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("could not reach {url}")]
    ConnectionFailure { url: String },

    /// The server answered with a non-2xx status.
    #[error("HTTP error {status}")]
    HttpError { status: u16 },

    /// The response body was not valid JSON.
    #[error("could not decode response: {0}")]
    DecodeError(String),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid record shape: {0}")]
    InvalidShape(String),

    /// The listing endpoint returned something other than an array.
    #[error("the catalog response is not a list")]
    InvalidResponseShape,

    #[error("no products available")]
    EmptyCatalog,

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl CatalogError {
    /// True for problems with user input or upstream data, as opposed to
    /// failures of the request itself.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidArgument(_)
                | CatalogError::MissingField(_)
                | CatalogError::InvalidShape(_)
                | CatalogError::InvalidResponseShape
                | CatalogError::EmptyCatalog
        )
    }

    /// Text shown to the person at the terminal.
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::InvalidArgument(msg) => format!("Invalid input: {msg}"),
            CatalogError::Timeout { .. } => {
                "The server took too long to respond. Try again later.".into()
            }
            CatalogError::ConnectionFailure { .. } => {
                "Connection error: check your internet connection.".into()
            }
            CatalogError::HttpError { status } => http_status_message(*status),
            CatalogError::DecodeError(_) => "The server sent a response that could not be read.".into(),
            CatalogError::MissingField(field) => {
                format!("Product data is incomplete: field '{field}' is missing.")
            }
            CatalogError::InvalidShape(msg) => format!("Product data is malformed: {msg}."),
            CatalogError::InvalidResponseShape => "The catalog response is not a list.".into(),
            CatalogError::EmptyCatalog => "No products available.".into(),
            CatalogError::Unexpected(msg) => format!("Unexpected error: {msg}"),
        }
    }
}

/// Classify an HTTP status for display.
pub fn http_status_message(status: u16) -> String {
    match status {
        404 => "Product not found (404): no product has that ID.".into(),
        400 => "Bad request (400): the parameters were rejected.".into(),
        s if s >= 500 => format!("Server error ({s}): try again later."),
        s => format!("HTTP error ({s})."),
    }
}
