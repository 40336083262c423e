use super::{CacheKey, CacheMetrics};
use dashmap::DashMap;
use hopdns_application::ports::RecordCache;
use hopdns_domain::{CacheEntry, RecordType, ZoneRecord};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Resolver cache keyed by lowercased domain.
///
/// Entries live while `now - cached_at <= ttl` and are only removed when a
/// lookup finds them expired. There is no size bound.
pub struct ResolutionCache {
    entries: DashMap<CacheKey, CacheEntry, FxBuildHasher>,
    ttl: Duration,
    metrics: Arc<CacheMetrics>,
}

impl ResolutionCache {
    pub fn new(ttl: Duration) -> Self {
        info!(ttl_secs = ttl.as_secs(), "Initializing resolution cache");
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            ttl,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn get(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        let key = CacheKey::new(domain);

        let expired = match self.entries.get(&key) {
            Some(entry) if !entry.is_expired(now, self.ttl) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                return Some(entry.value().clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            // Re-check under the shard lock: a concurrent insert may have
            // replaced the stale entry.
            if self
                .entries
                .remove_if(&key, |_, entry| entry.is_expired(now, self.ttl))
                .is_some()
            {
                self.metrics
                    .expirations
                    .fetch_add(1, AtomicOrdering::Relaxed);
                debug!(domain = %key, "Evicted expired cache entry");
            }
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    /// Valid entry at `now`, without counting or evicting.
    pub fn peek(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        self.entries
            .get(&CacheKey::new(domain))
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .map(|entry| entry.value().clone())
    }

    pub fn put(&self, domain: &str, record: ZoneRecord, now: Instant) {
        if record.kind != RecordType::A {
            debug!(domain, kind = %record.kind, "Refusing to cache non-address record");
            return;
        }

        let key = CacheKey::new(domain);
        debug!(domain = %key, target = %record.target, "Inserted into cache");
        self.entries.insert(key, CacheEntry::new(record, now));
        self.metrics
            .insertions
            .fetch_add(1, AtomicOrdering::Relaxed);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, domain: &str) -> bool {
        self.entries.contains_key(&CacheKey::new(domain))
    }
}

impl RecordCache for ResolutionCache {
    fn lookup(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        self.get(domain, now)
    }

    fn peek(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        ResolutionCache::peek(self, domain, now)
    }

    fn insert(&self, domain: &str, record: ZoneRecord, now: Instant) {
        self.put(domain, record, now)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
