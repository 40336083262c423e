use hopdns_application::use_cases::AnswerZoneQueryUseCase;
use hopdns_domain::Config;
use hopdns_infrastructure::dns::{load_zone_file, DatagramServer};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn start_authority(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let zone_path = config
        .authority
        .zone_file
        .as_deref()
        .ok_or_else(|| anyhow::anyhow!("authority needs a zone file (--zone-file)"))?;

    let zone = load_zone_file(zone_path).await?;
    let use_case = AnswerZoneQueryUseCase::new(Arc::new(zone));

    let server = DatagramServer::bind(
        &config.server.listen_addr(),
        Arc::new(use_case),
        "authority",
    )
    .await?;
    info!(zone_file = %zone_path.display(), "Authority ready");

    server.run(shutdown).await?;
    Ok(())
}
