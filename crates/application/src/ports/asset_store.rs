use favicon_domain::FaviconImage;

/// Lookup of icons bundled with the application.
///
/// A missing asset is a normal outcome: the resolver falls through to the
/// next matching rule or to the network.
pub trait AssetStore: Send + Sync {
    fn load(&self, asset_id: &str) -> Option<FaviconImage>;
}
