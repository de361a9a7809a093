//! Database Module
//!
//! Handles the SurrealDB connection and schema

pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

use crate::core::Config;
use repository::RepoResult;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Database service — owns a SurrealDB client handle
///
/// The handle is cheap to clone; every repository keeps its own copy.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect to the configured endpoint and apply the schema
    pub async fn connect(config: &Config) -> RepoResult<Self> {
        let db = any::connect(config.db_endpoint.as_str()).await?;

        if let Some((username, password)) = config.credentials() {
            db.signin(Root { username, password }).await?;
        }

        db.use_ns(config.db_namespace.as_str())
            .use_db(config.db_database.as_str())
            .await?;

        tracing::info!(
            endpoint = %config.db_endpoint,
            namespace = %config.db_namespace,
            database = %config.db_database,
            "Database connection established"
        );

        // 每次连接都重新定义 (IF NOT EXISTS)
        schema::apply(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }

    pub fn role_repository(&self) -> repository::RoleRepository {
        repository::RoleRepository::new(self.db.clone())
    }
}
