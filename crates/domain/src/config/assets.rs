use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssetConfig {
    /// Directory holding bundled icons named `<asset_id>.png` or `<asset_id>.ico`.
    #[serde(default = "default_asset_directory")]
    pub directory: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            directory: default_asset_directory(),
        }
    }
}

fn default_asset_directory() -> String {
    "assets/icons".to_string()
}
