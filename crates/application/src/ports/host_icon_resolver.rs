use async_trait::async_trait;
use favicon_domain::FaviconImage;

#[async_trait]
pub trait HostIconResolver: Send + Sync {
    /// Resolves the icon for a normalized host. Failure is `None`, never an error.
    async fn resolve_host(&self, host: &str) -> Option<FaviconImage>;

    /// Check only the icon cache without going to the network.
    /// Default implementation returns None (no cache).
    fn try_cache(&self, _host: &str) -> Option<FaviconImage> {
        None
    }
}
