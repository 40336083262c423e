use crate::DomainError;
use std::fmt;
use std::net::{Ipv6Addr, SocketAddr};
use std::str::FromStr;

/// Port assumed when a delegation target carries none.
pub const DEFAULT_AUTHORITY_PORT: u16 = 53;

/// Network endpoint of an authority: `host[:port]`.
///
/// The host is either an IP literal or a host name resolved at send time.
/// Host names are stored lowercased so endpoints compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Authority {
    pub host: String,
    pub port: u16,
}

impl Authority {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into().to_lowercase(),
            port,
        }
    }

    fn parse_port(raw: &str, input: &str) -> Result<u16, DomainError> {
        match raw.parse::<u16>() {
            Ok(0) | Err(_) => Err(DomainError::InvalidAuthority(format!(
                "invalid port in '{}'",
                input
            ))),
            Ok(port) => Ok(port),
        }
    }

    fn validate_host(host: &str, input: &str) -> Result<(), DomainError> {
        let valid = !host.is_empty()
            && host
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':'));
        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidAuthority(format!(
                "invalid host in '{}'",
                input
            )))
        }
    }
}

impl From<SocketAddr> for Authority {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

impl FromStr for Authority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        // [v6]:port or [v6]
        if let Some(rest) = input.strip_prefix('[') {
            let (host, after) = rest.split_once(']').ok_or_else(|| {
                DomainError::InvalidAuthority(format!("unterminated bracket in '{}'", input))
            })?;
            host.parse::<Ipv6Addr>().map_err(|_| {
                DomainError::InvalidAuthority(format!("invalid IPv6 address in '{}'", input))
            })?;
            let port = match after.strip_prefix(':') {
                Some(port) => Self::parse_port(port, input)?,
                None if after.is_empty() => DEFAULT_AUTHORITY_PORT,
                None => {
                    return Err(DomainError::InvalidAuthority(format!(
                        "unexpected text after ']' in '{}'",
                        input
                    )))
                }
            };
            return Ok(Self::new(host, port));
        }

        // Bare IPv6 literal without a port
        if input.parse::<Ipv6Addr>().is_ok() {
            return Ok(Self::new(input, DEFAULT_AUTHORITY_PORT));
        }

        let (host, port) = match input.rsplit_once(':') {
            Some((host, port)) => (host, Self::parse_port(port, input)?),
            None => (input, DEFAULT_AUTHORITY_PORT),
        };

        if host.contains(':') {
            return Err(DomainError::InvalidAuthority(format!(
                "IPv6 endpoints with a port need brackets: '{}'",
                input
            )));
        }
        Self::validate_host(host, input)?;

        Ok(Self::new(host, port))
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.contains(':') {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}
