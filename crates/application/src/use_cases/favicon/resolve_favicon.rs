use crate::ports::{AssetStore, HostIconResolver};
use favicon_domain::{FaviconImage, FaviconRequest, PatternTable};
use std::sync::Arc;
use tracing::debug;

/// Resolves the icon for one timeline activity.
///
/// Order, first hit wins:
/// 1. single-pattern rules on the primary then the secondary raw label
/// 2. dual-pattern rules on the primary then the secondary raw label
/// 3. network-backed resolution of the primary then the secondary host
///
/// Raw labels are matched unnormalized so path fragments such as
/// `developer.apple.com/xcode` stay visible to the rules.
pub struct ResolveFaviconUseCase {
    patterns: Arc<PatternTable>,
    assets: Arc<dyn AssetStore>,
    host_resolver: Arc<dyn HostIconResolver>,
}

impl ResolveFaviconUseCase {
    pub fn new(
        patterns: Arc<PatternTable>,
        assets: Arc<dyn AssetStore>,
        host_resolver: Arc<dyn HostIconResolver>,
    ) -> Self {
        Self {
            patterns,
            assets,
            host_resolver,
        }
    }

    pub async fn execute(&self, request: &FaviconRequest) -> Option<FaviconImage> {
        if let Some(image) = self.match_patterns(request) {
            return Some(image);
        }

        for host in request.hosts() {
            if let Some(image) = self.host_resolver.resolve_host(host).await {
                return Some(image);
            }
        }

        debug!(
            primary = ?request.primary_raw,
            secondary = ?request.secondary_raw,
            "No favicon resolved"
        );
        None
    }

    /// Pattern-table stage only; never touches the network.
    pub fn match_patterns(&self, request: &FaviconRequest) -> Option<FaviconImage> {
        request
            .raw_labels()
            .find_map(|raw| self.load_first(raw, self.patterns.single_candidates(raw), "single"))
            .or_else(|| {
                request.raw_labels().find_map(|raw| {
                    self.load_first(raw, self.patterns.dual_candidates(raw), "dual")
                })
            })
    }

    fn load_first<'a>(
        &self,
        raw: &str,
        candidates: impl Iterator<Item = &'a str>,
        table: &'static str,
    ) -> Option<FaviconImage> {
        for asset_id in candidates {
            match self.assets.load(asset_id) {
                Some(image) if image.is_displayable() => {
                    debug!(raw = %raw, asset_id = %asset_id, table, "Pattern HIT");
                    return Some(image);
                }
                _ => {
                    debug!(raw = %raw, asset_id = %asset_id, table, "Pattern asset unavailable");
                }
            }
        }
        None
    }
}
