//! hopdns Infrastructure Layer
pub mod dns;
