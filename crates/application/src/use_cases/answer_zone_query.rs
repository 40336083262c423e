use hopdns_domain::{Reply, ZoneTable};
use std::sync::Arc;
use tracing::debug;

/// Authoritative side: answer one query from a static zone table.
pub struct AnswerZoneQueryUseCase {
    zone: Arc<ZoneTable>,
}

impl AnswerZoneQueryUseCase {
    pub fn new(zone: Arc<ZoneTable>) -> Self {
        Self { zone }
    }

    pub fn execute(&self, query: &str) -> Reply {
        let reply = self.zone.answer(query);
        debug!(query, reply = %reply, "Zone lookup");
        reply
    }
}
