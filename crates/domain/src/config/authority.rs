use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Authoritative server configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthorityConfig {
    /// Zone file with one `domain,target,KIND` record per line
    #[serde(default)]
    pub zone_file: Option<PathBuf>,
}
