// Resolution cache: exact-key, TTL-bounded, lazily expired

pub mod key;
pub mod metrics;
pub mod storage;

pub use key::CacheKey;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use storage::ResolutionCache;
