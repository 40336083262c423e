use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Record kinds understood by every component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    /// Terminal address answer.
    A,
    /// Delegation to another authority.
    NS,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
        }
    }

    pub fn is_delegation(&self) -> bool {
        matches!(self, RecordType::NS)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "NS" => Ok(RecordType::NS),
            _ => Err(DomainError::InvalidRecordType(s.to_string())),
        }
    }
}
