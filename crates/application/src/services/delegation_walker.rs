use crate::ports::UpstreamTransport;
use hopdns_domain::{Authority, DomainError, RecordType, Reply, ResolutionOutcome};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Iterative resolver: asks one authority at a time and follows NS referrals
/// until an address record or a negative answer comes back.
///
/// Holds no shared state; the chain lives on the stack of [`walk`](Self::walk).
pub struct DelegationWalker {
    transport: Arc<dyn UpstreamTransport>,
    hop_timeout: Duration,
    max_hops: usize,
}

impl DelegationWalker {
    pub fn new(transport: Arc<dyn UpstreamTransport>, hop_timeout: Duration, max_hops: usize) -> Self {
        Self {
            transport,
            hop_timeout,
            max_hops,
        }
    }

    /// Interpret a single authority reply.
    pub fn interpret(raw: &str) -> Result<ResolutionOutcome, DomainError> {
        match Reply::parse(raw)? {
            Reply::NonExistent => Ok(ResolutionOutcome::NotFound),
            Reply::Record(record) => match record.kind {
                RecordType::A => Ok(ResolutionOutcome::Resolved(record)),
                RecordType::NS => record
                    .delegation_target()
                    .map(ResolutionOutcome::Delegated)
                    .map_err(|e| {
                        DomainError::MalformedUpstreamReply(format!(
                            "unusable delegation target in '{}': {e}",
                            record
                        ))
                    }),
            },
        }
    }

    /// Resolve `query` starting at `root`.
    ///
    /// Returns only terminal outcomes. The query string is sent unchanged to
    /// every authority in the chain.
    #[instrument(skip(self, root), fields(root = %root))]
    pub async fn walk(&self, query: &str, root: &Authority) -> Result<ResolutionOutcome, DomainError> {
        let mut current = root.clone();
        let mut visited: HashSet<Authority> = HashSet::new();
        visited.insert(current.clone());
        let mut hops = 0usize;

        loop {
            debug!(authority = %current, hop = hops, query, "Querying authority");

            let raw = self
                .transport
                .exchange(&current, query, self.hop_timeout)
                .await?;

            let next = match Self::interpret(&raw)? {
                ResolutionOutcome::Delegated(next) => next,
                terminal => return Ok(terminal),
            };

            hops += 1;
            if hops > self.max_hops {
                return Err(DomainError::DelegationLoop { hops });
            }
            if !visited.insert(next.clone()) {
                warn!(
                    authority = %next,
                    hop = hops,
                    "Delegation points back to an authority already visited"
                );
                return Err(DomainError::DelegationLoop { hops });
            }
            debug!(from = %current, to = %next, hop = hops, "Following delegation");
            current = next;
        }
    }
}
