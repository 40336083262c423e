//! hopdns Application Layer
//!
//! Resolution logic expressed against ports; transports and storage live in
//! the infrastructure crate.
pub mod ports;
pub mod services;
pub mod use_cases;
