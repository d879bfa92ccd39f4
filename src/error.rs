//! Error types for quotegate

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Quotegate errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown carrier: {0}")]
    UnknownCarrier(String),

    #[error("Unknown delivery option: {0}")]
    UnknownDeliveryOption(String),

    #[error("Shipment not found")]
    MissingShipment,

    #[error("Shipment is not bookable: {}", .reasons.join("; "))]
    NotBookable { reasons: Vec<String> },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
