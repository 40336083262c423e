use crate::di::ResolverServices;
use hopdns_domain::Config;
use hopdns_infrastructure::dns::DatagramServer;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_resolver(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let services = ResolverServices::new(config)?;

    let server = DatagramServer::bind(
        &config.server.listen_addr(),
        services.use_case.clone(),
        "resolver",
    )
    .await?;
    info!(
        root = %services.use_case.root(),
        cache_ttl_secs = services.cache.ttl().as_secs(),
        max_hops = config.resolver.max_hops,
        "Resolver ready"
    );

    server.run(shutdown).await?;

    let stats = services.metrics.snapshot();
    let cache = services.cache.metrics().snapshot();
    info!(
        queries = stats.queries,
        cache_hits = stats.cache_hits,
        walks = stats.walks,
        resolved = stats.resolved,
        not_found = stats.not_found,
        failures = stats.failures(),
        cached_entries = services.cache.len(),
        cache_hit_rate = cache.hit_rate(),
        "Resolver stopped"
    );
    Ok(())
}
