//! Role document mapping

use serde::Deserialize;
use shared::models::{EmployeeRole, Role};
use surrealdb::RecordId;

/// Table holding role documents
pub const TABLE: &str = "roles";

/// Projection shared by every role read: `id` comes back as the bare key
pub const PROJECTION: &str = "record::id(id) AS id, name";

/// Role document as returned by queries using [`PROJECTION`]
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRow {
    pub id: String,
    pub name: EmployeeRole,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Role {
            id: Some(row.id),
            name: Some(row.name),
        }
    }
}

/// Strip an optional `roles:` prefix, leaving the bare key
pub fn bare_key(id: &str) -> &str {
    id.strip_prefix(TABLE)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// RecordId for a public role id (`abc` or `roles:abc`)
pub fn record_id(id: &str) -> RecordId {
    RecordId::from_table_key(TABLE, bare_key(id).to_string())
}
