//! hopdns Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod resolution;
pub mod wire;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{Authority, RecordType, ZoneRecord, DEFAULT_AUTHORITY_PORT};
pub use errors::DomainError;
pub use resolution::{CacheEntry, ResolutionOutcome};
pub use wire::{Reply, MAX_DATAGRAM_SIZE, NEGATIVE_RESPONSE};
pub use zone::ZoneTable;
