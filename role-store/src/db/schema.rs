//! Store-side schema for the role table
//!
//! The `Role` type in `shared` knows nothing about storage; the table name,
//! field constraints and the uniqueness of `name` are declared here.

use super::models::role::TABLE;
use super::repository::RepoResult;
use shared::models::EmployeeRole;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

/// Name of the unique index on `roles.name`
pub const NAME_INDEX: &str = "roles_name_unique";

/// Build the schema statements
pub fn definitions() -> String {
    let allowed = EmployeeRole::ALL
        .iter()
        .map(|role| format!("'{}'", role.as_str()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "DEFINE TABLE IF NOT EXISTS {TABLE} SCHEMAFULL;\n\
         DEFINE FIELD IF NOT EXISTS name ON {TABLE} TYPE string ASSERT $value INSIDE [{allowed}];\n\
         DEFINE INDEX IF NOT EXISTS {NAME_INDEX} ON {TABLE} FIELDS name UNIQUE;"
    )
}

/// Apply the schema; safe to run on every connect
pub async fn apply(db: &Surreal<Any>) -> RepoResult<()> {
    db.query(definitions()).await?.check()?;
    Ok(())
}
