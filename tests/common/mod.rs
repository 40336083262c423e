#![allow(dead_code)]

pub mod test_server;

pub use fixtures::Zones;
pub use test_server::{TestAuthority, TestClient, TestResolver, TestResolverBuilder};
