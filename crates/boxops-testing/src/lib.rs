//! Test utilities for boxops services.
//!
//! Provides a recording fake [`Gateway`](boxops_core::gateway::Gateway) and
//! builders for sea-orm mock connections.
//! For `#[cfg(test)]` blocks and `tests/` only, never production code.

pub mod db;
pub mod gateway;
