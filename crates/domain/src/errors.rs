use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaviconError {
    #[error("Transport error fetching {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Empty response body from {0}")]
    EmptyBody(String),

    #[error("Image decode failed: {0}")]
    Decode(String),

    #[error("Decoded image has zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Bundled asset not found: {0}")]
    AssetNotFound(String),

    #[error("Invalid host: {0}")]
    InvalidHost(String),
}
