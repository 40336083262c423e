pub mod datagram;
pub mod handlers;

pub use datagram::{DatagramServer, QueryHandler};
