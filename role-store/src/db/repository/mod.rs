//! Repository Module
//!
//! Data access for SurrealDB tables.

pub mod role;

pub use role::RoleRepository;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
///
/// "Not found" is never an error here; lookups return `Option`.
#[derive(Debug, Error)]
pub enum RepoError {
    /// Store failure (connectivity, timeout, malformed document, constraint
    /// violation), passed through as-is
    #[error("Database error: {0}")]
    Database(#[from] surrealdb::Error),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}
