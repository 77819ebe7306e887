//! User repository backed by the `users` collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{bson::doc, Collection};

use super::entities::UserDocument;
use crate::domain::{CreateUser, User};
use crate::errors::AppResult;
use crate::infra::Database;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user and return it with its assigned identifier
    async fn create(&self, input: CreateUser) -> AppResult<User>;

    /// Every stored user, in the store's natural order
    async fn find_all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    collection: Collection<UserDocument>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.users(),
        }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: CreateUser) -> AppResult<User> {
        let user = User::new(input);
        self.collection.insert_one(UserDocument::from(&user)).await?;
        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(User::from).collect())
    }
}
