use dashmap::DashMap;
use favicon_application::ports::{AssetStore, ImageDecoder};
use favicon_domain::{FaviconError, FaviconImage};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

const ASSET_EXTENSIONS: [&str; 2] = ["png", "ico"];

/// Bundled icons read from a directory as `<asset_id>.png` or `<asset_id>.ico`.
///
/// Each asset is read and decoded at most once; misses are remembered too.
pub struct DirectoryAssetStore {
    directory: PathBuf,
    decoder: Arc<dyn ImageDecoder>,
    loaded: DashMap<Arc<str>, Option<FaviconImage>>,
}

impl DirectoryAssetStore {
    pub fn new(directory: impl Into<PathBuf>, decoder: Arc<dyn ImageDecoder>) -> Self {
        Self {
            directory: directory.into(),
            decoder,
            loaded: DashMap::new(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn read_asset(&self, asset_id: &str) -> Result<FaviconImage, FaviconError> {
        if !is_plain_asset_id(asset_id) {
            return Err(FaviconError::AssetNotFound(asset_id.to_string()));
        }

        for extension in ASSET_EXTENSIONS {
            let path = self.directory.join(format!("{asset_id}.{extension}"));
            if let Ok(bytes) = std::fs::read(&path) {
                return self.decoder.decode(&bytes);
            }
        }

        Err(FaviconError::AssetNotFound(asset_id.to_string()))
    }
}

fn is_plain_asset_id(asset_id: &str) -> bool {
    !asset_id.is_empty()
        && asset_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl AssetStore for DirectoryAssetStore {
    fn load(&self, asset_id: &str) -> Option<FaviconImage> {
        if let Some(entry) = self.loaded.get(asset_id) {
            return entry.value().clone();
        }

        let image = match self.read_asset(asset_id) {
            Ok(image) => Some(image),
            Err(e) => {
                debug!(asset_id = %asset_id, error = %e, "Bundled asset unavailable");
                None
            }
        };

        self.loaded.insert(Arc::from(asset_id), image.clone());
        image
    }
}
