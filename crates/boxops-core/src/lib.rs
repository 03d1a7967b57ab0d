//! Shared plumbing for boxops services.
//!
//! The data access [`gateway`] lives here together with the ambient pieces
//! every service needs: logging, configuration helpers, the JSON error
//! envelope, health checks, request ids and graceful shutdown.

pub mod config;
pub mod error;
pub mod gateway;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod shutdown;
pub mod tracing;
