use crate::favicon::source::FaviconSource;
use async_trait::async_trait;
use favicon_application::ports::{HostIconResolver, HttpFetcher, HttpRequest, ImageDecoder};
use favicon_domain::config::ResolverConfig;
use favicon_domain::{FaviconError, FaviconImage};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use std::sync::Arc;
use tokio::task::AbortHandle;
use tracing::{debug, warn};

/// Races the aggregator endpoint against the site's own `/favicon.ico`.
///
/// The direct-site attempt starts after a short delay so a healthy
/// aggregator wins ties. The first attempt to yield a displayable image wins
/// and the other is aborted. Every failure is an empty outcome.
pub struct RacingIconFetcher {
    http: Arc<dyn HttpFetcher>,
    decoder: Arc<dyn ImageDecoder>,
    config: Arc<ResolverConfig>,
}

struct AbortOnDrop(Vec<AbortHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        for handle in &self.0 {
            handle.abort();
        }
    }
}

impl RacingIconFetcher {
    pub fn new(
        http: Arc<dyn HttpFetcher>,
        decoder: Arc<dyn ImageDecoder>,
        config: ResolverConfig,
    ) -> Self {
        Self {
            http,
            decoder,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the winning source together with its image.
    pub async fn race(&self, host: &str) -> Option<(FaviconSource, FaviconImage)> {
        debug!(host = %host, "Racing icon sources");

        let mut abort_handles = AbortOnDrop(Vec::with_capacity(FaviconSource::ALL.len()));
        let mut attempts = FuturesUnordered::new();

        for source in FaviconSource::ALL {
            let http = Arc::clone(&self.http);
            let decoder = Arc::clone(&self.decoder);
            let delay = source.start_delay(&self.config);
            let url = match source.url(host, &self.config) {
                Ok(url) => url,
                Err(e) => {
                    debug!(host = %host, source = source.as_str(), error = %e, "Icon source skipped");
                    continue;
                }
            };
            let request = HttpRequest::image(url, self.config.request_timeout());

            let handle = tokio::spawn(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                fetch_icon(http.as_ref(), decoder.as_ref(), &request)
                    .await
                    .map(|image| (source, image))
                    .map_err(|e| (source, e))
            });
            abort_handles.0.push(handle.abort_handle());
            attempts.push(handle);
        }

        while let Some(join_result) = attempts.next().await {
            match join_result {
                Ok(Ok((source, image))) => {
                    debug!(
                        host = %host,
                        source = source.as_str(),
                        width = image.width(),
                        height = image.height(),
                        "Icon source won race"
                    );
                    return Some((source, image));
                }
                Ok(Err((source, e))) => {
                    debug!(host = %host, source = source.as_str(), error = %e, "Icon source failed");
                }
                Err(e) if e.is_cancelled() => {}
                Err(e) => {
                    warn!(host = %host, error = %e, "Icon fetch task panicked");
                }
            }
        }

        None
    }
}

#[async_trait]
impl HostIconResolver for RacingIconFetcher {
    async fn resolve_host(&self, host: &str) -> Option<FaviconImage> {
        self.race(host).await.map(|(_, image)| image)
    }
}

/// One attempt: GET, require 200 with a body, decode, reject empty bitmaps.
pub async fn fetch_icon(
    http: &dyn HttpFetcher,
    decoder: &dyn ImageDecoder,
    request: &HttpRequest,
) -> Result<FaviconImage, FaviconError> {
    let response = http.get(request).await?;

    if response.status != 200 {
        return Err(FaviconError::HttpStatus {
            url: request.url.clone(),
            status: response.status,
        });
    }

    if response.body.is_empty() {
        return Err(FaviconError::EmptyBody(request.url.clone()));
    }

    decoder.decode(&response.body)?.into_displayable()
}
