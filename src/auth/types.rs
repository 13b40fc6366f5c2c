//! Authorization types shared by guards, sessions and the RBAC system

use super::rbac::{Permission, Role, get_role_permissions};
use serde::{Deserialize, Serialize};

/// Identity a guard evaluates.
///
/// Built per session from an external authentication source; `permissions`
/// is the materialized list, normally the role's table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserContext {
    /// User identifier
    pub id: String,
    /// Assigned role
    pub role: Role,
    /// Materialized permissions
    pub permissions: Vec<Permission>,
    /// Whether the session behind this context is live
    pub is_authenticated: bool,
}

impl UserContext {
    pub fn new(
        id: impl Into<String>,
        role: Role,
        permissions: Vec<Permission>,
        is_authenticated: bool,
    ) -> Self {
        Self {
            id: id.into(),
            role,
            permissions,
            is_authenticated,
        }
    }

    /// Authenticated context carrying the role's permission table
    pub fn for_role(id: impl Into<String>, role: Role) -> Self {
        Self::new(id, role, get_role_permissions(role).to_vec(), true)
    }

    /// Same identity with authentication revoked
    pub fn unauthenticated(mut self) -> Self {
        self.is_authenticated = false;
        self
    }
}

/// Outcome of a guard.
///
/// A denial is a value, not an error: callers branch on `allowed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardResult {
    /// Whether access is granted
    pub allowed: bool,
    /// Human-readable diagnostic for denials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl GuardResult {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
