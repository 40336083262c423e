use hopdns_application::services::{DelegationWalker, ResolverMetrics};
use hopdns_application::use_cases::ResolveQueryUseCase;
use hopdns_domain::Config;
use hopdns_infrastructure::dns::{ResolutionCache, UdpTransport};
use std::sync::Arc;

/// Everything a running resolver needs, wired from configuration.
pub struct ResolverServices {
    pub use_case: Arc<ResolveQueryUseCase>,
    pub cache: Arc<ResolutionCache>,
    pub metrics: Arc<ResolverMetrics>,
}

impl ResolverServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let root = config.root_authority()?;
        let cache = Arc::new(ResolutionCache::new(config.resolver.cache_ttl()));
        let metrics = Arc::new(ResolverMetrics::new());

        let walker = DelegationWalker::new(
            Arc::new(UdpTransport::new()),
            config.resolver.hop_timeout(),
            config.resolver.max_hops,
        );
        let use_case = ResolveQueryUseCase::new(
            cache.clone(),
            walker,
            root,
            config.resolver.resolution_timeout(),
        )
        .with_metrics(Arc::clone(&metrics));

        Ok(Self {
            use_case: Arc::new(use_case),
            cache,
            metrics,
        })
    }
}
