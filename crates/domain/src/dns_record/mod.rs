pub mod authority;
pub mod record;
pub mod record_type;

pub use authority::{Authority, DEFAULT_AUTHORITY_PORT};
pub use record::ZoneRecord;
pub use record_type::RecordType;
