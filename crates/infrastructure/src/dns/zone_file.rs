use hopdns_domain::{DomainError, ZoneTable};
use std::path::Path;
use tracing::info;

/// Read and parse a zone file (`domain,target,KIND` per line).
pub async fn load_zone_file(path: &Path) -> Result<ZoneTable, DomainError> {
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainError::IoError(format!("failed to read zone file {}: {e}", path.display()))
    })?;

    let zone = ZoneTable::parse(&content)?;
    info!(path = %path.display(), records = zone.len(), "Zone file loaded");
    Ok(zone)
}
