#![allow(dead_code)]
use hopdns_domain::{RecordType, ZoneRecord, ZoneTable};

/// Fluent zone table construction for tests.
#[derive(Default)]
pub struct ZoneBuilder {
    records: Vec<ZoneRecord>,
}

impl ZoneBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn a(mut self, name: &str, address: &str) -> Self {
        self.records.push(ZoneRecord::new(name, address, RecordType::A));
        self
    }

    pub fn ns(mut self, suffix: &str, authority: &str) -> Self {
        self.records.push(ZoneRecord::new(suffix, authority, RecordType::NS));
        self
    }

    pub fn build(self) -> ZoneTable {
        ZoneTable::from_records(self.records)
    }
}
