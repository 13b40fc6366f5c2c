//! Authentication and authorization
//!
//! Registries, guards, route rules and the session lifecycle. [`AccessSystem`]
//! ties them together as explicit application state.

pub mod guards;
pub mod rbac;
pub mod routes;
pub mod session;
pub mod types;

pub use rbac::{Permission, RbacSystem, Role};
pub use session::{AuthSession, SessionState, UserProfile};
pub use types::{GuardResult, UserContext};

use crate::config::Config;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// RBAC system plus the current session
#[derive(Debug, Clone)]
pub struct AccessSystem {
    /// RBAC system
    rbac: Arc<RbacSystem>,
    /// Session state
    session: SessionState,
}

impl AccessSystem {
    /// Validate `config` and create an access system with no active session
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing access system");

        config.validate()?;

        let rbac = Arc::new(RbacSystem::new(config.rbac())?);
        let session = SessionState::new(config.session())?;

        info!("Access system initialized successfully");
        Ok(Self { rbac, session })
    }

    pub fn rbac(&self) -> &RbacSystem {
        &self.rbac
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Start a session for `profile`
    pub fn login(&mut self, profile: UserProfile, now: DateTime<Utc>) -> Result<&AuthSession> {
        self.session.start(profile, now)
    }

    /// End the current session
    pub fn logout(&mut self) -> Option<AuthSession> {
        self.session.end()
    }

    /// Apply a role change to the signed-in user
    pub fn change_role(&mut self, role: Role) -> Result<()> {
        self.session.refresh_role(role)
    }

    /// Current guard context, if anyone is signed in
    pub fn context(&self, now: DateTime<Utc>) -> Option<UserContext> {
        self.session.user_context(now)
    }

    /// Permission check for the current user
    pub fn authorize(&self, permission: Permission, now: DateTime<Utc>) -> GuardResult {
        let context = self.context(now);
        let result = guards::permission_guard(context.as_ref(), permission);
        debug!(permission = %permission, allowed = result.allowed, "Authorize");
        result
    }

    /// Navigation check for the current user
    pub fn authorize_route(&self, path: &str, now: DateTime<Utc>) -> GuardResult {
        let context = self.context(now);
        routes::route_guard(context.as_ref(), path)
    }

    /// Whether the signed-in user holds an admin role
    pub fn is_admin(&self, now: DateTime<Utc>) -> bool {
        self.context(now)
            .is_some_and(|context| self.rbac.is_admin(&context))
    }
}
