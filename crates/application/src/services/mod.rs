pub mod delegation_walker;
pub mod resolver_metrics;

pub use delegation_walker::DelegationWalker;
pub use resolver_metrics::{ResolverMetrics, ResolverMetricsSnapshot};
