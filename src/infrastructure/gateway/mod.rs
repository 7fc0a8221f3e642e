//! Shortlink gateway implementations.
//!
//! - [`HttpShortlinkGateway`] - production client for the third-party API
//! - [`FixedShortlinkGateway`] - deterministic double for tests

pub mod fixed_gateway;
pub mod http_shortlink_gateway;

pub use fixed_gateway::FixedShortlinkGateway;
pub use http_shortlink_gateway::HttpShortlinkGateway;
