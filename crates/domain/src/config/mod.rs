//! Configuration module for hopdns
//!
//! - `root`: Main configuration and CLI overrides
//! - `server`: Listening address and port
//! - `resolver`: Root authority, cache TTL and walk limits
//! - `authority`: Zone file served by an authoritative instance
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod authority;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod server;

pub use authority::AuthorityConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
