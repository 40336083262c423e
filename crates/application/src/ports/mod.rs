pub mod record_cache;
pub mod upstream_transport;

pub use record_cache::RecordCache;
pub use upstream_transport::UpstreamTransport;
