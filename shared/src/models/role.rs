//! Role Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 员工角色 (closed set, stored by its string form)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeRole {
    #[serde(rename = "ROLE_EMPLOYEE")]
    Employee,
    #[serde(rename = "ROLE_MANAGER")]
    Manager,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl EmployeeRole {
    /// Every member, in declaration order
    pub const ALL: [EmployeeRole; 3] = [
        EmployeeRole::Employee,
        EmployeeRole::Manager,
        EmployeeRole::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeRole::Employee => "ROLE_EMPLOYEE",
            EmployeeRole::Manager => "ROLE_MANAGER",
            EmployeeRole::Admin => "ROLE_ADMIN",
        }
    }
}

impl fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when parsing an unknown role name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown employee role: {0}")]
pub struct ParseEmployeeRoleError(pub String);

impl FromStr for EmployeeRole {
    type Err = ParseEmployeeRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmployeeRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| ParseEmployeeRoleError(s.to_string()))
    }
}

/// Role entity
///
/// `id` is assigned by the store on first save. Both fields may be replaced
/// freely; the store decides what it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<EmployeeRole>,
}

impl Role {
    /// Create an unsaved role
    pub fn new(name: EmployeeRole) -> Self {
        Self {
            id: None,
            name: Some(name),
        }
    }

    /// Whether the role has been saved at least once
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_name() {
        for name in EmployeeRole::ALL {
            let role = Role::new(name);
            assert_eq!(role.name, Some(name));
            assert_eq!(role.id, None);
            assert!(!role.is_persisted());
        }
    }

    #[test]
    fn test_default_is_unset() {
        let role = Role::default();
        assert_eq!(role.id, None);
        assert_eq!(role.name, None);
    }

    #[test]
    fn test_fields_replace_independently() {
        let mut role = Role::new(EmployeeRole::Employee);
        role.id = Some("abc".to_string());
        assert_eq!(role.name, Some(EmployeeRole::Employee));

        role.name = Some(EmployeeRole::Admin);
        assert_eq!(role.id.as_deref(), Some("abc"));
        assert!(role.is_persisted());
    }

    #[test]
    fn test_equality_covers_id_and_name() {
        let mut a = Role::new(EmployeeRole::Manager);
        let b = Role::new(EmployeeRole::Manager);
        assert_eq!(a, b);

        a.id = Some("x".to_string());
        assert_ne!(a, b);
    }

    #[test]
    fn test_string_form_round_trips() {
        for name in EmployeeRole::ALL {
            assert_eq!(name.as_str().parse::<EmployeeRole>(), Ok(name));
            assert_eq!(name.to_string(), name.as_str());
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "ROLE_OWNER".parse::<EmployeeRole>().unwrap_err();
        assert_eq!(err, ParseEmployeeRoleError("ROLE_OWNER".to_string()));
        assert!("role_admin".parse::<EmployeeRole>().is_err());
    }

    #[test]
    fn test_serde_uses_string_form() {
        let json = serde_json::to_string(&EmployeeRole::Manager).unwrap();
        assert_eq!(json, "\"ROLE_MANAGER\"");

        let role: Role = serde_json::from_str(r#"{"name":"ROLE_ADMIN"}"#).unwrap();
        assert_eq!(role, Role::new(EmployeeRole::Admin));
    }

    #[test]
    fn test_serde_rejects_unknown_name() {
        let result = serde_json::from_str::<Role>(r#"{"id":"r1","name":"ROLE_OWNER"}"#);
        assert!(result.is_err());
    }
}
