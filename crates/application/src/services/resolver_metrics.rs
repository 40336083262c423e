use hopdns_domain::DomainError;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-resolver counters. Failures are split by kind so operators can tell a
/// misconfigured zone from a genuinely missing name.
#[derive(Debug, Default)]
pub struct ResolverMetrics {
    queries: AtomicU64,
    cache_hits: AtomicU64,
    walks: AtomicU64,
    resolved: AtomicU64,
    not_found: AtomicU64,
    upstream_timeouts: AtomicU64,
    delegation_loops: AtomicU64,
    malformed_replies: AtomicU64,
    resolution_timeouts: AtomicU64,
    other_failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolverMetricsSnapshot {
    pub queries: u64,
    pub cache_hits: u64,
    pub walks: u64,
    pub resolved: u64,
    pub not_found: u64,
    pub upstream_timeouts: u64,
    pub delegation_loops: u64,
    pub malformed_replies: u64,
    pub resolution_timeouts: u64,
    pub other_failures: u64,
}

impl ResolverMetricsSnapshot {
    pub fn failures(&self) -> u64 {
        self.upstream_timeouts
            + self.delegation_loops
            + self.malformed_replies
            + self.resolution_timeouts
            + self.other_failures
    }
}

impl ResolverMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record_query(&self) {
        self.queries.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_walk(&self) {
        self.walks.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_resolved(&self) {
        self.resolved.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, error: &DomainError) {
        let counter = match error {
            DomainError::UpstreamTimeout { .. } => &self.upstream_timeouts,
            DomainError::DelegationLoop { .. } => &self.delegation_loops,
            DomainError::MalformedUpstreamReply(_) => &self.malformed_replies,
            DomainError::ResolutionTimeout => &self.resolution_timeouts,
            _ => &self.other_failures,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ResolverMetricsSnapshot {
        ResolverMetricsSnapshot {
            queries: self.queries.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            walks: self.walks.load(Ordering::Relaxed),
            resolved: self.resolved.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            upstream_timeouts: self.upstream_timeouts.load(Ordering::Relaxed),
            delegation_loops: self.delegation_loops.load(Ordering::Relaxed),
            malformed_replies: self.malformed_replies.load(Ordering::Relaxed),
            resolution_timeouts: self.resolution_timeouts.load(Ordering::Relaxed),
            other_failures: self.other_failures.load(Ordering::Relaxed),
        }
    }
}
