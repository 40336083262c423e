use super::{Authority, RecordType};
use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Zone record representation shared by authorities, resolver and client.
///
/// `name` keeps its original case for display; comparisons go through
/// [`ZoneRecord::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Domain name (or `.suffix` marker for delegations)
    pub name: String,
    /// Address for `A`, `address[:port]` of the next authority for `NS`
    pub target: String,
    /// Record kind
    pub kind: RecordType,
}

impl ZoneRecord {
    /// Create a new zone record
    pub fn new(name: impl Into<String>, target: impl Into<String>, kind: RecordType) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            kind,
        }
    }

    /// Lowercased name used for every lookup.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Whether this record is a suffix delegation entry (`.co.il` style).
    pub fn is_suffix_delegation(&self) -> bool {
        self.kind.is_delegation() && self.name.starts_with('.')
    }

    /// Endpoint of the next authority for `NS` records.
    pub fn delegation_target(&self) -> Result<Authority, DomainError> {
        if !self.kind.is_delegation() {
            return Err(DomainError::InvalidRecord(format!(
                "{} is not a delegation record",
                self.name
            )));
        }
        self.target.parse()
    }

    /// `name,target,KIND` text form.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ZoneRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.name, self.target, self.kind)
    }
}

impl FromStr for ZoneRecord {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.trim().splitn(3, ',').map(str::trim);

        let (name, target, kind) = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(target), Some(kind)) => (name, target, kind),
            _ => {
                return Err(DomainError::InvalidRecord(format!(
                    "expected name,target,KIND but got '{}'",
                    s.trim()
                )))
            }
        };

        if name.is_empty() || target.is_empty() {
            return Err(DomainError::InvalidRecord(format!(
                "empty field in '{}'",
                s.trim()
            )));
        }

        Ok(Self::new(name, target, kind.parse()?))
    }
}
