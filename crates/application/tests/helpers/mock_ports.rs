#![allow(dead_code)]

use async_trait::async_trait;
use hopdns_application::ports::{RecordCache, UpstreamTransport};
use hopdns_domain::{Authority, CacheEntry, DomainError, ZoneRecord, ZoneTable};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

// ============================================================================
// In-memory RecordCache
// ============================================================================

pub struct InMemoryRecordCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl InMemoryRecordCache {
    pub fn new(ttl: Duration) -> Arc<Self> {
        Arc::new(Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        })
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl RecordCache for InMemoryRecordCache {
    fn lookup(&self, domain: &str, now: Instant) -> Option<CacheEntry> {
        let key = domain.to_lowercase();
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get(&key)?.clone();
        if entry.is_expired(now, self.ttl) {
            entries.remove(&key);
            return None;
        }
        Some(entry)
    }

    fn insert(&self, domain: &str, record: ZoneRecord, now: Instant) {
        self.entries
            .lock()
            .unwrap()
            .insert(domain.to_lowercase(), CacheEntry::new(record, now));
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

// ============================================================================
// Upstream backed by zone tables, one per authority
// ============================================================================

pub struct ZoneUpstream {
    zones: RwLock<HashMap<Authority, ZoneTable>>,
    calls: AtomicUsize,
    delay: Duration,
}

impl ZoneUpstream {
    pub fn new() -> Arc<Self> {
        Self::with_delay(Duration::ZERO)
    }

    pub fn with_delay(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            zones: RwLock::new(HashMap::new()),
            calls: AtomicUsize::new(0),
            delay,
        })
    }

    /// Register (or replace) the zone an authority serves.
    pub fn serve(&self, authority: &str, zone: &str) {
        self.zones.write().unwrap().insert(
            authority.parse().unwrap(),
            ZoneTable::parse(zone).unwrap(),
        );
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamTransport for ZoneUpstream {
    async fn exchange(
        &self,
        authority: &Authority,
        query: &str,
        timeout: Duration,
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if !self.delay.is_zero() {
            if self.delay > timeout {
                tokio::time::sleep(timeout).await;
                return Err(DomainError::UpstreamTimeout {
                    authority: authority.to_string(),
                });
            }
            tokio::time::sleep(self.delay).await;
        }

        let reply = self
            .zones
            .read()
            .unwrap()
            .get(authority)
            .map(|zone| zone.answer(query).encode());

        match reply {
            Some(reply) => Ok(reply),
            None => {
                tokio::time::sleep(timeout).await;
                Err(DomainError::UpstreamTimeout {
                    authority: authority.to_string(),
                })
            }
        }
    }
}
