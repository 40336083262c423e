pub mod cache;
pub mod server;
pub mod transport;
pub mod zone_file;

pub use cache::{CacheMetrics, ResolutionCache};
pub use server::{DatagramServer, QueryHandler};
pub use transport::UdpTransport;
pub use zone_file::load_zone_file;
