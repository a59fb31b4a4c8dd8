use crate::favicon::cache::IconCache;
use async_trait::async_trait;
use dashmap::DashMap;
use favicon_application::ports::{HostIconResolver, TelemetrySink};
use favicon_domain::{FaviconImage, TelemetryEvent};
use rustc_hash::FxBuildHasher;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

#[derive(Clone)]
enum InflightState {
    Pending,
    Ready(Option<FaviconImage>),
}

type InflightSender = Arc<watch::Sender<InflightState>>;
type InflightMap = DashMap<Arc<str>, InflightSender, FxBuildHasher>;

/// Unregisters the host on every exit path of the leader task, including
/// abort. Waiters still subscribed see an empty outcome instead of hanging.
struct InflightLeaderGuard {
    inflight: Arc<InflightMap>,
    host: Arc<str>,
}

impl Drop for InflightLeaderGuard {
    fn drop(&mut self) {
        if let Some((_, tx)) = self.inflight.remove(&self.host) {
            tx.send_replace(InflightState::Ready(None));
        }
    }
}

/// Memoizing, deduplicating front for a network resolver.
///
/// At most one network resolution per host runs at a time; concurrent callers
/// for the same host share its outcome. Successes land in a bounded cache.
/// A resolution that exhausts every source emits one `favicon_fetch_failed`
/// event. The resolution runs in its own task, so a caller that stops waiting
/// does not stop the cache from being populated.
pub struct CachedIconResolver {
    inner: Arc<dyn HostIconResolver>,
    cache: Arc<IconCache>,
    telemetry: Arc<dyn TelemetrySink>,
    inflight: Arc<InflightMap>,
}

impl CachedIconResolver {
    pub fn new(
        inner: Arc<dyn HostIconResolver>,
        cache: Arc<IconCache>,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Self {
        Self {
            inner,
            cache,
            telemetry,
            inflight: Arc::new(DashMap::with_hasher(FxBuildHasher)),
        }
    }

    pub fn cache(&self) -> &Arc<IconCache> {
        &self.cache
    }

    pub fn inflight_len(&self) -> usize {
        self.inflight.len()
    }

    fn check_cache(&self, host: &str) -> Option<FaviconImage> {
        let image = self.cache.get(host)?;
        debug!(host = %host, "Cache HIT");
        Some(image)
    }

    fn register_or_join_inflight(&self, host: &Arc<str>) -> (bool, watch::Receiver<InflightState>) {
        match self.inflight.entry(Arc::clone(host)) {
            dashmap::Entry::Occupied(e) => {
                let rx = e.get().subscribe();
                drop(e);
                (false, rx)
            }
            dashmap::Entry::Vacant(e) => {
                let (tx, rx) = watch::channel(InflightState::Pending);
                e.insert(Arc::new(tx));
                (true, rx)
            }
        }
    }

    fn spawn_leader(&self, host: Arc<str>) {
        let inner = Arc::clone(&self.inner);
        let cache = Arc::clone(&self.cache);
        let telemetry = Arc::clone(&self.telemetry);
        let inflight = Arc::clone(&self.inflight);

        tokio::spawn(async move {
            let guard = InflightLeaderGuard {
                inflight: Arc::clone(&inflight),
                host: Arc::clone(&host),
            };

            debug!(host = %host, "Cache MISS");

            // A previous leader may have finished between the caller's cache
            // check and registration.
            let outcome = match cache.peek(&host) {
                Some(image) => Some(image),
                None => {
                    let outcome = inner.resolve_host(&host).await;
                    match &outcome {
                        Some(image) => cache.insert(&host, image.clone()),
                        None => {
                            debug!(host = %host, "All icon sources failed");
                            telemetry.capture(TelemetryEvent::fetch_failed(Arc::clone(&host)));
                        }
                    }
                    outcome
                }
            };

            if let Some((_, tx)) = inflight.remove(&host) {
                tx.send_replace(InflightState::Ready(outcome));
            }

            drop(guard);
        });
    }

    async fn await_outcome(mut rx: watch::Receiver<InflightState>) -> Option<FaviconImage> {
        match rx
            .wait_for(|state| matches!(state, InflightState::Ready(_)))
            .await
        {
            Ok(state) => match &*state {
                InflightState::Ready(outcome) => outcome.clone(),
                InflightState::Pending => None,
            },
            Err(_) => None,
        }
    }
}

#[async_trait]
impl HostIconResolver for CachedIconResolver {
    fn try_cache(&self, host: &str) -> Option<FaviconImage> {
        self.check_cache(host)
    }

    async fn resolve_host(&self, host: &str) -> Option<FaviconImage> {
        if let Some(cached) = self.check_cache(host) {
            return Some(cached);
        }

        let key: Arc<str> = Arc::from(host);
        let (is_leader, rx) = self.register_or_join_inflight(&key);

        if is_leader {
            self.spawn_leader(key);
        } else {
            debug!(host = %host, "Joining in-flight resolution");
        }

        Self::await_outcome(rx).await
    }
}
