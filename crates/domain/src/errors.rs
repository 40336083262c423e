use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid authority endpoint: {0}")]
    InvalidAuthority(String),

    #[error("Malformed upstream reply: {0}")]
    MalformedUpstreamReply(String),

    #[error("Upstream authority {authority} did not answer in time")]
    UpstreamTimeout { authority: String },

    #[error("Delegation loop detected after {hops} hops")]
    DelegationLoop { hops: usize },

    #[error("Resolution exceeded its total time budget")]
    ResolutionTimeout,

    #[error("Zone file line {line}: {reason}")]
    ZoneFile { line: usize, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Short label used as a structured log field and metrics key.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidRecord(_) => "invalid_record",
            Self::InvalidRecordType(_) => "invalid_record_type",
            Self::InvalidAuthority(_) => "invalid_authority",
            Self::MalformedUpstreamReply(_) => "malformed_upstream_reply",
            Self::UpstreamTimeout { .. } => "upstream_timeout",
            Self::DelegationLoop { .. } => "delegation_loop",
            Self::ResolutionTimeout => "resolution_timeout",
            Self::ZoneFile { .. } => "zone_file",
            Self::IoError(_) => "io",
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
