//! Commands module - CLI command implementations.

pub mod openapi;
pub mod serve;
