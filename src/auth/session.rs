//! Session lifecycle
//!
//! Holds the signed-in user between login and logout and derives the
//! [`UserContext`] that guards evaluate.

use super::rbac::{Permission, Role, get_role_permissions};
use super::types::UserContext;
use crate::config::SessionConfig;
use crate::utils::error::{AccessError, Result};
use crate::utils::logging::SecurityLogger;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// User record supplied by the external authentication provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Student (NIM) or staff (NIP) number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nim_nip: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl UserProfile {
    pub fn new(
        id: impl Into<String>,
        email: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            name: name.into(),
            role,
            nim_nip: None,
            is_active: true,
        }
    }

    pub fn with_nim_nip(mut self, nim_nip: impl Into<String>) -> Self {
        self.nim_nip = Some(nim_nip.into());
        self
    }
}

/// A live session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub session_id: Uuid,
    pub user: UserProfile,
    /// Permissions materialized from the user's role at login
    pub permissions: Vec<Permission>,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl AuthSession {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Explicit session state, created at startup and torn down on logout
#[derive(Debug, Clone)]
pub struct SessionState {
    ttl: Duration,
    current: Option<AuthSession>,
}

impl SessionState {
    /// Fails when `ttl_seconds` does not fit a `chrono::Duration`
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let ttl = i64::try_from(config.ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .ok_or_else(|| {
                AccessError::config(format!("Session TTL out of range: {}", config.ttl_seconds))
            })?;

        Ok(Self { ttl, current: None })
    }

    /// Begin a session for `profile`, replacing any previous one
    pub fn start(&mut self, profile: UserProfile, now: DateTime<Utc>) -> Result<&AuthSession> {
        if !profile.is_active {
            SecurityLogger::log_auth_event("login", Some(&profile.id), false, Some("inactive"));
            return Err(AccessError::auth(format!(
                "User account is inactive: {}",
                profile.email
            )));
        }

        let expires_at = now.checked_add_signed(self.ttl).ok_or_else(|| {
            AccessError::config(format!("Session expiry overflows for {}", profile.email))
        })?;

        let session = AuthSession {
            session_id: Uuid::new_v4(),
            permissions: get_role_permissions(profile.role).to_vec(),
            user: profile,
            started_at: now,
            expires_at,
        };

        info!(
            user_id = %session.user.id,
            role = %session.user.role,
            session_id = %session.session_id,
            "Session started"
        );
        SecurityLogger::log_auth_event("login", Some(&session.user.id), true, None);

        Ok(&*self.current.insert(session))
    }

    /// Tear down the current session, returning it if there was one
    pub fn end(&mut self) -> Option<AuthSession> {
        let session = self.current.take();
        if let Some(session) = &session {
            info!(user_id = %session.user.id, "Session ended");
            SecurityLogger::log_auth_event("logout", Some(&session.user.id), true, None);
        }
        session
    }

    pub fn current(&self) -> Option<&AuthSession> {
        self.current.as_ref()
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.current
            .as_ref()
            .is_some_and(|session| !session.is_expired(now))
    }

    /// Context for guard evaluation; `None` when nobody is signed in.
    ///
    /// An expired session still yields the user's identity but unauthenticated.
    pub fn user_context(&self, now: DateTime<Utc>) -> Option<UserContext> {
        let session = self.current.as_ref()?;
        let expired = session.is_expired(now);
        if expired {
            debug!(user_id = %session.user.id, "Session expired");
        }

        Some(UserContext::new(
            session.user.id.clone(),
            session.user.role,
            session.permissions.clone(),
            !expired,
        ))
    }

    /// Apply a role change to the live session
    pub fn refresh_role(&mut self, role: Role) -> Result<()> {
        let session = self
            .current
            .as_mut()
            .ok_or_else(|| AccessError::auth("No active session"))?;

        info!(
            user_id = %session.user.id,
            from = %session.user.role,
            to = %role,
            "Session role changed"
        );
        session.user.role = role;
        session.permissions = get_role_permissions(role).to_vec();
        Ok(())
    }
}
