//! RBAC system core functionality

use crate::config::{RbacConfig, Validate};
use crate::utils::error::{AccessError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

use super::permission_registry::Permission;
use super::role_registry::{Role, get_role_permissions};
use super::types::{PermissionDefinition, RoleDefinition};

/// RBAC system for managing roles and permissions
#[derive(Debug, Clone)]
pub struct RbacSystem {
    /// RBAC configuration
    pub(super) config: RbacConfig,
    /// Role definitions
    pub(super) roles: HashMap<Role, RoleDefinition>,
    /// Permission definitions
    pub(super) permissions: HashMap<Permission, PermissionDefinition>,
}

impl RbacSystem {
    /// Create a new RBAC system
    pub fn new(config: &RbacConfig) -> Result<Self> {
        info!("Initializing RBAC system");

        config
            .validate()
            .map_err(|e| AccessError::config(format!("RBAC config error: {}", e)))?;

        let mut rbac = Self {
            config: config.clone(),
            roles: HashMap::new(),
            permissions: HashMap::new(),
        };

        rbac.initialize_default_permissions();
        rbac.initialize_default_roles();

        info!("RBAC system initialized successfully");
        Ok(rbac)
    }

    pub(super) fn initialize_default_permissions(&mut self) {
        debug!("Initializing default permissions");

        for permission in Permission::ALL.iter().copied() {
            self.permissions.insert(
                permission,
                PermissionDefinition {
                    permission,
                    name: permission.as_str().to_string(),
                    description: permission.display_name().to_string(),
                    resource: permission.resource(),
                    action: permission.action(),
                },
            );
        }

        debug!("Initialized {} default permissions", self.permissions.len());
    }

    pub(super) fn initialize_default_roles(&mut self) {
        debug!("Initializing default roles");

        for role in Role::ALL.iter().copied() {
            self.roles.insert(
                role,
                RoleDefinition {
                    role,
                    name: role.display_name().to_string(),
                    description: role.description().to_string(),
                    permissions: get_role_permissions(role).iter().copied().collect(),
                    level: role.level(),
                    is_admin: self.config.admin_roles.contains(&role),
                },
            );
        }

        debug!("Initialized {} default roles", self.roles.len());
    }

    pub fn config(&self) -> &RbacConfig {
        &self.config
    }

    /// List all roles, highest in the hierarchy first
    pub fn list_roles(&self) -> Vec<&RoleDefinition> {
        let mut roles: Vec<_> = self.roles.values().collect();
        roles.sort_by(|a, b| b.level.cmp(&a.level));
        roles
    }

    /// List all permissions in registry order
    pub fn list_permissions(&self) -> Vec<&PermissionDefinition> {
        Permission::ALL
            .iter()
            .filter_map(|permission| self.permissions.get(permission))
            .collect()
    }

    /// Each role with its permissions in table order
    pub fn role_matrix(&self) -> Vec<(Role, Vec<Permission>)> {
        self.list_roles()
            .into_iter()
            .map(|definition| {
                (
                    definition.role,
                    get_role_permissions(definition.role).to_vec(),
                )
            })
            .collect()
    }
}
