//! Default role seeding

use super::repository::{RepoResult, RoleRepository};
use shared::models::{EmployeeRole, Role};

/// Make sure every [`EmployeeRole`] has a stored document
///
/// Returns the stored roles in `EmployeeRole::ALL` order. Safe to call on
/// every startup.
pub async fn ensure_default_roles(repo: &RoleRepository) -> RepoResult<Vec<Role>> {
    let mut roles = Vec::with_capacity(EmployeeRole::ALL.len());

    for name in EmployeeRole::ALL {
        let role = match repo.find_by_name(name).await? {
            Some(existing) => existing,
            None => {
                let created = repo.save(Role::new(name)).await?;
                tracing::info!(name = %name, id = ?created.id, "Seeded default role");
                created
            }
        };
        roles.push(role);
    }

    Ok(roles)
}
