//! User domain entity and related types.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
///
/// The password is kept exactly as submitted; nothing hashes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Identifier assigned when the record is first stored
    pub id: ObjectId,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    /// Build a user record with a freshly generated identifier
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: ObjectId::new(),
            username: input.username,
            email: input.email,
            password: input.password,
        }
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User as rendered over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Database-assigned identifier (24 hex characters)
    #[serde(rename = "_id")]
    #[schema(example = "65f1c0a2e4b0a1b2c3d4e5f6")]
    pub id: String,
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "a@x.com")]
    pub email: String,
    #[schema(example = "secret")]
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_hex(),
            username: user.username,
            email: user.email,
            password: user.password,
        }
    }
}
