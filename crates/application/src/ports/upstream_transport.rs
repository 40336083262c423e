use async_trait::async_trait;
use hopdns_domain::{Authority, DomainError};
use std::time::Duration;

/// Sends one query to one authority and returns its raw reply text.
#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Every call is a fresh, independent request.
    ///
    /// Must fail with [`DomainError::UpstreamTimeout`] when no reply arrives
    /// within `timeout`.
    async fn exchange(
        &self,
        authority: &Authority,
        query: &str,
        timeout: Duration,
    ) -> Result<String, DomainError>;
}
