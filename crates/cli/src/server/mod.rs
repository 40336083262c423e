pub mod authority;
pub mod resolver;

pub use authority::start_authority;
pub use resolver::start_resolver;

use tokio_util::sync::CancellationToken;
use tracing::info;

/// Cancel `token` on Ctrl+C.
pub fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
        }
        token.cancel();
    });
}
