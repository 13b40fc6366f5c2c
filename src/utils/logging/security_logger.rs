//! Security-aware logging utilities

use tracing::{debug, info, warn};

/// Target for every security event, usable in `RUST_LOG` filters
pub const SECURITY_TARGET: &str = "lab_access::security";

const MAX_FIELD_LEN: usize = 128;

/// Truncate and strip control characters to prevent log injection
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_control())
        .take(MAX_FIELD_LEN)
        .collect()
}

/// Security-aware logging utilities
pub struct SecurityLogger;

impl SecurityLogger {
    /// Log authentication events (login, logout)
    pub fn log_auth_event(
        event_type: &str,
        user_id: Option<&str>,
        success: bool,
        details: Option<&str>,
    ) {
        let user_id = user_id.map(sanitize).unwrap_or_default();
        let details = details.map(sanitize).unwrap_or_default();

        if success {
            info!(
                target: SECURITY_TARGET,
                event_type,
                user_id = %user_id,
                details = %details,
                "Authentication success: {}",
                event_type
            );
        } else {
            warn!(
                target: SECURITY_TARGET,
                event_type,
                user_id = %user_id,
                details = %details,
                "Authentication failure: {}",
                event_type
            );
        }
    }

    /// Log authorization decisions
    pub fn log_authz_event(user_id: &str, permission: &str, granted: bool, reason: Option<&str>) {
        let user_id = sanitize(user_id);
        let reason = reason.map(sanitize).unwrap_or_default();

        if granted {
            debug!(
                target: SECURITY_TARGET,
                user_id = %user_id,
                permission,
                granted,
                "Authorization granted: {}",
                permission
            );
        } else {
            warn!(
                target: SECURITY_TARGET,
                user_id = %user_id,
                permission,
                granted,
                reason = %reason,
                "Authorization denied: {}",
                permission
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_control_characters() {
        assert_eq!(sanitize("u1\n[FAKE] admin"), "u1[FAKE] admin");
        assert_eq!(sanitize(&"x".repeat(500)).len(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_log_events_without_subscriber() {
        SecurityLogger::log_auth_event("login", Some("u1"), true, None);
        SecurityLogger::log_auth_event("login", None, false, Some("inactive"));
        SecurityLogger::log_authz_event("u1", "user:read", true, None);
        SecurityLogger::log_authz_event("u1", "user:delete", false, Some("Missing permission"));

        // Test passes if no panic occurs
    }
}
