//! Domain layer - Core business entities
//!
//! This module contains the core domain models that represent
//! business concepts independent of the HTTP and storage layers.

pub mod user;

pub use user::{CreateUser, User, UserResponse};
