use crate::wire::Reply;
use crate::{DomainError, ZoneRecord};
use std::collections::HashMap;

/// Static record table served by an authority.
///
/// Built once and read-only afterwards. Lookup is exact match first, then the
/// longest `.suffix` NS entry the query ends with.
#[derive(Debug, Clone, Default)]
pub struct ZoneTable {
    records: HashMap<String, ZoneRecord>,
    /// Suffix delegations ordered longest first, ties broken by key.
    suffixes: Vec<(String, ZoneRecord)>,
}

impl ZoneTable {
    /// Build a table; a later record with the same key replaces an earlier one.
    pub fn from_records(records: impl IntoIterator<Item = ZoneRecord>) -> Self {
        let records: HashMap<String, ZoneRecord> =
            records.into_iter().map(|r| (r.key(), r)).collect();

        let mut suffixes: Vec<(String, ZoneRecord)> = records
            .iter()
            .filter(|(_, r)| r.is_suffix_delegation())
            .map(|(k, r)| (k.clone(), r.clone()))
            .collect();
        suffixes.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Self { records, suffixes }
    }

    /// Parse zone-file text: one `domain,target,KIND` per line.
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut records = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let record = line.parse::<ZoneRecord>().map_err(|e| DomainError::ZoneFile {
                line: idx + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        Ok(Self::from_records(records))
    }

    pub fn lookup(&self, query: &str) -> Option<&ZoneRecord> {
        let key = query.trim().to_lowercase();
        if let Some(record) = self.records.get(&key) {
            return Some(record);
        }
        self.suffixes
            .iter()
            .find(|(suffix, _)| key.ends_with(suffix.as_str()))
            .map(|(_, record)| record)
    }

    /// Reply an authority sends for `query`.
    pub fn answer(&self, query: &str) -> Reply {
        match self.lookup(query) {
            Some(record) => Reply::Record(record.clone()),
            None => Reply::NonExistent,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
