use favicon_domain::{FaviconError, FaviconImage};

pub trait ImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<FaviconImage, FaviconError>;
}
