use favicon_application::ports::{HostIconResolver, HttpFetcher, ImageDecoder, TelemetrySink};
use favicon_application::use_cases::ResolveFaviconUseCase;
use favicon_domain::{Config, PatternTable};
use favicon_infrastructure::favicon::{
    CachedIconResolver, DirectoryAssetStore, IconCache, ImageCrateDecoder, RacingIconFetcher,
    ReqwestFetcher, TelemetryEmitter, TelemetryMetrics,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

pub struct FaviconServices {
    pub resolve_favicon: Arc<ResolveFaviconUseCase>,
    pub host_resolver: Arc<CachedIconResolver>,
    pub metrics: TelemetryMetrics,
    telemetry_task: Option<JoinHandle<()>>,
}

impl FaviconServices {
    pub fn new(config: &Config) -> Self {
        info!(
            cache_capacity = config.resolver.cache_capacity,
            assets = %config.assets.directory,
            "Initializing favicon services"
        );

        let decoder: Arc<dyn ImageDecoder> = Arc::new(ImageCrateDecoder::new());
        let http: Arc<dyn HttpFetcher> =
            Arc::new(ReqwestFetcher::new(config.resolver.resource_timeout()));

        let (telemetry, metrics, telemetry_task) = Self::setup_telemetry(config);

        let fetcher = Arc::new(RacingIconFetcher::new(
            http,
            Arc::clone(&decoder),
            config.resolver.clone(),
        ));
        let host_resolver = Arc::new(CachedIconResolver::new(
            fetcher,
            Arc::new(IconCache::new(config.resolver.cache_capacity)),
            telemetry,
        ));
        let assets = Arc::new(DirectoryAssetStore::new(&config.assets.directory, decoder));

        let resolve_favicon = Arc::new(ResolveFaviconUseCase::new(
            Arc::new(PatternTable::builtin()),
            assets,
            Arc::clone(&host_resolver) as Arc<dyn HostIconResolver>,
        ));

        Self {
            resolve_favicon,
            host_resolver,
            metrics,
            telemetry_task,
        }
    }

    fn setup_telemetry(
        config: &Config,
    ) -> (Arc<dyn TelemetrySink>, TelemetryMetrics, Option<JoinHandle<()>>) {
        let metrics = TelemetryMetrics::new();
        let (emitter, rx) = TelemetryEmitter::from_config(&config.telemetry);

        let task = match rx {
            Some(rx) => Some(tokio::spawn(metrics.clone().consume(rx))),
            None => {
                info!("Telemetry disabled");
                None
            }
        };
        (Arc::new(emitter), metrics, task)
    }

    /// Drops every sender and waits for the consumer to drain what is queued.
    pub async fn shutdown(self) {
        let Self {
            resolve_favicon,
            host_resolver,
            metrics,
            telemetry_task,
        } = self;
        drop(resolve_favicon);
        drop(host_resolver);

        if let Some(task) = telemetry_task {
            let _ = task.await;
        }

        info!(
            telemetry_events = metrics.total_events(),
            "Favicon services stopped"
        );
    }
}
