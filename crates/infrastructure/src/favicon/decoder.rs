use favicon_application::ports::ImageDecoder;
use favicon_domain::{FaviconError, FaviconImage};

/// Decodes PNG, ICO, GIF, JPEG, WebP and BMP payloads into RGBA8.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCrateDecoder;

impl ImageCrateDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<FaviconImage, FaviconError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| FaviconError::Decode(e.to_string()))?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        FaviconImage::new(width, height, rgba.into_raw()).into_displayable()
    }
}
