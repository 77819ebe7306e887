//! Mongo User API - user records over HTTP, stored in MongoDB
//!
//! Exposes `POST /api/users` and `GET /api/users` with Axum on top of a
//! layered design: handler → service → repository → MongoDB.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities
//! - **services**: Application use cases
//! - **infra**: MongoDB connection and repositories
//! - **api**: HTTP handlers, error handling, and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Print the OpenAPI document
//! cargo run -- openapi
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{CreateUser, User, UserResponse};
pub use errors::{AppError, AppResult};
pub use infra::Database;
