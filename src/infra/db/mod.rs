//! Database connection and initialization.

use mongodb::{
    bson::doc,
    options::ClientOptions,
    Client, Collection,
};

use crate::config::{Config, APP_NAME, DEFAULT_DATABASE_NAME, USERS_COLLECTION};
use crate::errors::AppResult;
use crate::infra::repositories::entities::UserDocument;

/// Database wrapper for connection management.
///
/// The driver keeps its own connection pool behind `Client`, so clones
/// share the same pool.
#[derive(Clone)]
pub struct Database {
    client: Client,
    database: mongodb::Database,
}

impl Database {
    /// Connect to MongoDB and verify the server answers a `ping`.
    ///
    /// An unreachable server fails once the configured server selection
    /// timeout elapses.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        match Self::open(config).await {
            Ok(db) => {
                tracing::info!(database = %db.name(), "MongoDB connected");
                Ok(db)
            }
            Err(e) => {
                tracing::error!("MongoDB connection error: {}", e);
                Err(e)
            }
        }
    }

    async fn open(config: &Config) -> AppResult<Self> {
        let mut options = ClientOptions::parse(config.mongo_uri.as_str()).await?;
        options.app_name = Some(APP_NAME.to_string());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let name = resolve_database_name(config, &options);
        let client = Client::with_options(options)?;
        let database = client.database(&name);

        let db = Self { client, database };
        db.ping().await?;
        Ok(db)
    }

    /// Name of the database in use.
    pub fn name(&self) -> &str {
        self.database.name()
    }

    /// Typed handle to the users collection.
    pub fn users(&self) -> Collection<UserDocument> {
        self.database.collection(USERS_COLLECTION)
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Close all pooled connections.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }
}

/// MONGO_DB_NAME wins, then the database named in the URI path.
fn resolve_database_name(config: &Config, options: &ClientOptions) -> String {
    config
        .database_name
        .clone()
        .or_else(|| options.default_database.clone())
        .unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string())
}
