use crate::FaviconError;
use std::fmt;
use std::sync::Arc;

/// Decoded icon bitmap in RGBA8 layout.
///
/// Pixels sit behind an `Arc` so an image can be handed to every waiter of an
/// in-flight resolution and kept in the cache without copying.
#[derive(Clone, PartialEq, Eq)]
pub struct FaviconImage {
    width: u32,
    height: u32,
    rgba: Arc<[u8]>,
}

impl FaviconImage {
    pub fn new(width: u32, height: u32, rgba: impl Into<Arc<[u8]>>) -> Self {
        Self {
            width,
            height,
            rgba: rgba.into(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn is_displayable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Rejects zero-width or zero-height bitmaps.
    pub fn into_displayable(self) -> Result<Self, FaviconError> {
        if self.is_displayable() {
            Ok(self)
        } else {
            Err(FaviconError::ZeroDimension {
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn shares_pixels_with(&self, other: &FaviconImage) -> bool {
        Arc::ptr_eq(&self.rgba, &other.rgba)
    }
}

impl fmt::Debug for FaviconImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FaviconImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}
