//! Text protocol spoken between clients, resolvers and authorities.
//!
//! One UDP datagram per message. A query is the bare domain; a reply is
//! either `name,target,KIND` or the literal [`NEGATIVE_RESPONSE`].

use crate::{DomainError, RecordType, ZoneRecord};
use std::fmt;

/// Literal reply for "no such domain" (and for every internal failure).
pub const NEGATIVE_RESPONSE: &str = "non-existent domain";

/// Largest datagram any component sends or accepts.
pub const MAX_DATAGRAM_SIZE: usize = 1024;

/// A reply datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Record(ZoneRecord),
    NonExistent,
}

impl Reply {
    /// Parse a reply received from an authority.
    ///
    /// Anything that is neither the negative marker nor a well-formed
    /// three-field record becomes [`DomainError::MalformedUpstreamReply`].
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed == NEGATIVE_RESPONSE {
            return Ok(Reply::NonExistent);
        }
        trimmed
            .parse::<ZoneRecord>()
            .map(Reply::Record)
            .map_err(|e| DomainError::MalformedUpstreamReply(format!("{trimmed:?}: {e}")))
    }

    pub fn encode(&self) -> String {
        match self {
            Reply::Record(record) => record.to_line(),
            Reply::NonExistent => NEGATIVE_RESPONSE.to_string(),
        }
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, Reply::NonExistent)
    }

    pub fn record(&self) -> Option<&ZoneRecord> {
        match self {
            Reply::Record(record) => Some(record),
            Reply::NonExistent => None,
        }
    }

    /// Target of an address answer, what a client prints.
    pub fn address(&self) -> Option<&str> {
        self.record()
            .filter(|r| r.kind == RecordType::A)
            .map(|r| r.target.as_str())
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Record(record) => write!(f, "{record}"),
            Reply::NonExistent => f.write_str(NEGATIVE_RESPONSE),
        }
    }
}

/// Decode a query datagram into the trimmed domain string.
///
/// Returns `None` for non-UTF-8 payloads; such queries get a negative reply.
pub fn decode_query(datagram: &[u8]) -> Option<&str> {
    std::str::from_utf8(datagram).ok().map(str::trim)
}

/// Decode a reply datagram; invalid UTF-8 is a malformed reply.
pub fn decode_reply(datagram: &[u8]) -> Result<Reply, DomainError> {
    let text = std::str::from_utf8(datagram)
        .map_err(|_| DomainError::MalformedUpstreamReply("reply is not UTF-8".to_string()))?;
    Reply::parse(text)
}
