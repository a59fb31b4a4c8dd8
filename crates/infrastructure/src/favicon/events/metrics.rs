use favicon_domain::TelemetryEvent;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tracing::info;

/// Hosts tracked individually; the least recently failing host is dropped
/// first. The total counter is unaffected.
pub const DEFAULT_TRACKED_HOSTS: usize = 256;

type HostCounts = LruCache<Arc<str>, u64, FxBuildHasher>;

/// Aggregates captured telemetry for logging and inspection.
#[derive(Clone)]
pub struct TelemetryMetrics {
    total_events: Arc<AtomicU64>,

    failures_by_host: Arc<Mutex<HostCounts>>,
}

impl TelemetryMetrics {
    pub fn new() -> Self {
        Self::with_tracked_hosts(DEFAULT_TRACKED_HOSTS)
    }

    pub fn with_tracked_hosts(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            total_events: Arc::new(AtomicU64::new(0)),
            failures_by_host: Arc::new(Mutex::new(LruCache::with_hasher(
                capacity,
                FxBuildHasher,
            ))),
        }
    }

    fn hosts(&self) -> MutexGuard<'_, HostCounts> {
        self.failures_by_host
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn record(&self, event: &TelemetryEvent) {
        self.total_events.fetch_add(1, Ordering::Relaxed);

        let mut hosts = self.hosts();
        match hosts.get_mut(&event.host) {
            Some(count) => *count += 1,
            None => {
                hosts.push(Arc::clone(&event.host), 1);
            }
        }
    }

    pub fn total_events(&self) -> u64 {
        self.total_events.load(Ordering::Relaxed)
    }

    pub fn failures_for(&self, host: &str) -> u64 {
        self.hosts().peek(host).copied().unwrap_or(0)
    }

    pub fn tracked_hosts(&self) -> usize {
        self.hosts().len()
    }

    /// Drains the emitter's receiver until every sender is dropped.
    pub async fn consume(self, mut rx: mpsc::UnboundedReceiver<TelemetryEvent>) {
        while let Some(event) = rx.recv().await {
            self.record(&event);
            info!(
                event = event.name,
                host = %event.host,
                total = self.total_events(),
                "Telemetry captured"
            );
        }
    }
}

impl Default for TelemetryMetrics {
    fn default() -> Self {
        Self::new()
    }
}
