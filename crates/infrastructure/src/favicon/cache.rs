use favicon_domain::FaviconImage;
use lru::LruCache;
use rustc_hash::FxBuildHasher;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::trace;

pub const DEFAULT_CAPACITY: usize = 256;

type IconLru = LruCache<Arc<str>, FaviconImage, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconCacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

/// Host → icon memo bounded by entry count, least-recently-used evicted first.
///
/// Every access goes through one mutex; critical sections never await.
pub struct IconCache {
    entries: Mutex<IconLru>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl IconCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, IconLru> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, host: &str) -> Option<FaviconImage> {
        let found = self.lock().get(host).cloned();
        match found {
            Some(_) => self.hits.fetch_add(1, Ordering::Relaxed),
            None => self.misses.fetch_add(1, Ordering::Relaxed),
        };
        found
    }

    /// Lookup that neither promotes the entry nor counts toward stats.
    pub fn peek(&self, host: &str) -> Option<FaviconImage> {
        self.lock().peek(host).cloned()
    }

    /// Membership check that does not promote the entry.
    pub fn contains(&self, host: &str) -> bool {
        self.lock().contains(host)
    }

    pub fn insert(&self, host: &str, image: FaviconImage) {
        if let Some((evicted, _)) = self.lock().push(Arc::from(host), image) {
            if &*evicted != host {
                trace!(evicted = %evicted, "Icon cache eviction");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn stats(&self) -> IconCacheStats {
        let entries = self.lock();
        IconCacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
