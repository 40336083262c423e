use super::{AuthorityConfig, ConfigError, LoggingConfig, ResolverConfig, ServerConfig};
use crate::Authority;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration, loaded from TOML and then patched by CLI flags.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub authority: AuthorityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values given on the command line; `Some` wins over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub root_authority: Option<String>,
    pub cache_ttl: Option<u64>,
    pub hop_timeout_ms: Option<u64>,
    pub max_hops: Option<usize>,
    pub zone_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load from `path` (defaults when `None`) and apply CLI overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(root) = overrides.root_authority {
            self.resolver.root_authority = root;
        }
        if let Some(ttl) = overrides.cache_ttl {
            self.resolver.cache_ttl = ttl;
        }
        if let Some(timeout) = overrides.hop_timeout_ms {
            self.resolver.hop_timeout_ms = timeout;
        }
        if let Some(max_hops) = overrides.max_hops {
            self.resolver.max_hops = max_hops;
        }
        if let Some(zone_file) = overrides.zone_file {
            self.authority.zone_file = Some(zone_file);
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Root authority as a parsed endpoint.
    pub fn root_authority(&self) -> Result<Authority, ConfigError> {
        self.resolver
            .root_authority
            .parse()
            .map_err(|e| ConfigError::Validation(format!("resolver.root_authority: {e}")))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.root_authority()?;

        if self.resolver.hop_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "resolver.hop_timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.resolver.resolution_timeout_ms < self.resolver.hop_timeout_ms {
            return Err(ConfigError::Validation(
                "resolver.resolution_timeout_ms must be at least hop_timeout_ms".to_string(),
            ));
        }
        if self.resolver.max_hops == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_hops must be greater than zero".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::Validation(format!(
                "logging.level must be one of {:?}, got '{}'",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}
