//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Path prefix every API route is mounted under
pub const API_PREFIX: &str = "/api";

/// Maximum accepted JSON request body (100 KiB)
pub const MAX_JSON_BODY_BYTES: usize = 100 * 1024;

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection URI (for development)
pub const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/mydb";

/// Database used when neither MONGO_DB_NAME nor the URI names one
pub const DEFAULT_DATABASE_NAME: &str = "test";

/// Default server selection timeout in seconds
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// Collection holding user documents
pub const USERS_COLLECTION: &str = "users";

/// Application name reported to the MongoDB server
pub const APP_NAME: &str = "mongo-user-api";
