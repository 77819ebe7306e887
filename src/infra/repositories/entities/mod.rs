//! MongoDB document definitions
//!
//! These are storage-specific shapes separate from domain models.

pub mod user;

pub use user::UserDocument;
