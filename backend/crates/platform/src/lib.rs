//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations for the backend:
//! - Requester identification from gateway-supplied headers
//! - Outbound HTTP client construction (timeouts, User-Agent)

pub mod client;
pub mod http;
