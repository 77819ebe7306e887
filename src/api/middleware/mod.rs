//! API middleware.

mod error_handler;

pub use error_handler::{handle_panic, not_found};
