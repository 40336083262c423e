use hopdns_domain::{CacheEntry, ZoneRecord};
use std::time::Instant;

/// TTL-bounded store of resolved address records.
///
/// Keys are normalized to lowercase by the implementation.
pub trait RecordCache: Send + Sync {
    /// Returns the entry if present and still valid at `now`; an expired entry
    /// is removed and reported as absent.
    fn lookup(&self, domain: &str, now: Instant) -> Option<CacheEntry>;

    /// Like `lookup` but leaves the cache untouched: no eviction and no
    /// hit/miss accounting. Used for the re-check after waiting on an
    /// in-flight walk.
    fn peek(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        self.lookup(domain, now)
    }

    /// Stores `record` under `domain`, replacing any previous entry.
    fn insert(&self, domain: &str, record: ZoneRecord, now: Instant);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
