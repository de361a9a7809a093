//! Role Repository

use super::{BaseRepository, RepoResult};
use crate::db::models::RoleRow;
use crate::db::models::role::{PROJECTION, TABLE, bare_key, record_id};
use shared::models::{EmployeeRole, Role};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use surrealdb::error::Api;

#[derive(Clone)]
pub struct RoleRepository {
    base: BaseRepository,
}

impl RoleRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a role
    ///
    /// Without an id the store assigns one; with an id the document is
    /// overwritten (or created under that id). Returns the stored record.
    pub async fn save(&self, role: Role) -> RepoResult<Role> {
        let name = role.name.map(|n| n.as_str());
        let mut result = match role.id.as_deref() {
            None => {
                tracing::debug!(name = ?name, "Creating role");
                self.base
                    .db()
                    .query(format!(
                        "LET $doc = CREATE ONLY {TABLE} CONTENT {{ name: $name }};\n\
                         RETURN {{ id: record::id($doc.id), name: $doc.name }};"
                    ))
                    .bind(("name", name))
                    .await?
            }
            Some(id) => {
                tracing::debug!(id = %bare_key(id), name = ?name, "Upserting role");
                self.base
                    .db()
                    .query(
                        "LET $doc = UPSERT ONLY $thing CONTENT { name: $name };\n\
                         RETURN { id: record::id($doc.id), name: $doc.name };",
                    )
                    .bind(("thing", record_id(id)))
                    .bind(("name", name))
                    .await?
            }
        }
        .check()?;

        // 语句 0 是 LET，结果在语句 1
        let saved: Option<RoleRow> = result.take(1)?;
        let row = saved.ok_or_else(|| {
            surrealdb::Error::from(Api::Query(format!("save returned no {TABLE} document")))
        })?;
        Ok(row.into())
    }

    /// Find role by id (`abc` or `roles:abc`)
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Role>> {
        tracing::debug!(id = %bare_key(id), "Finding role by id");
        let rows: Vec<RoleRow> = self
            .base
            .db()
            .query(format!("SELECT {PROJECTION} FROM $thing"))
            .bind(("thing", record_id(id)))
            .await?
            .take(0)?;
        Ok(rows.into_iter().next().map(Role::from))
    }

    /// Find all roles (store order)
    pub async fn find_all(&self) -> RepoResult<Vec<Role>> {
        let rows: Vec<RoleRow> = self
            .base
            .db()
            .query(format!("SELECT {PROJECTION} FROM {TABLE}"))
            .await?
            .take(0)?;
        tracing::debug!(count = rows.len(), "Listed roles");
        Ok(rows.into_iter().map(Role::from).collect())
    }

    /// Hard delete a role; deleting a missing id is not an error
    pub async fn delete_by_id(&self, id: &str) -> RepoResult<()> {
        tracing::debug!(id = %bare_key(id), "Deleting role");
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", record_id(id)))
            .await?
            .check()?;
        Ok(())
    }

    /// Find role by name
    ///
    /// `name` is unique at the store (see `schema`), so there is at most one match.
    pub async fn find_by_name(&self, name: EmployeeRole) -> RepoResult<Option<Role>> {
        tracing::debug!(name = %name, "Finding role by name");
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT {PROJECTION} FROM {TABLE} WHERE name = $name LIMIT 1"
            ))
            .bind(("name", name.as_str()))
            .await?;
        let rows: Vec<RoleRow> = result.take(0)?;
        Ok(rows.into_iter().next().map(Role::from))
    }
}
