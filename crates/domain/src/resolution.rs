use crate::{Authority, ZoneRecord};
use std::time::{Duration, Instant};

/// Result of interpreting one authority reply.
///
/// Only `Resolved` and `NotFound` ever leave the delegation walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved(ZoneRecord),
    NotFound,
    Delegated(Authority),
}

/// A cached address record and the instant it was stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    pub record: ZoneRecord,
    pub cached_at: Instant,
}

impl CacheEntry {
    pub fn new(record: ZoneRecord, cached_at: Instant) -> Self {
        Self { record, cached_at }
    }

    /// Valid while `now - cached_at <= ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }

    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.cached_at)
    }
}
