//! Session lifecycle integration tests

#[cfg(test)]
mod tests {
    use crate::common::{GuardAssertions, ProfileFactory, fixed_now};
    use chrono::Duration;
    use lab_access::auth::guards::permission_guard;
    use lab_access::auth::{AccessSystem, SessionState};
    use lab_access::config::{Config, SessionConfig};
    use lab_access::{AccessError, Permission, Role};

    #[test]
    fn test_session_context_feeds_guards() {
        let mut state = SessionState::new(&SessionConfig::default()).unwrap();
        let profile = ProfileFactory::create(Role::Dosen);
        let id = profile.id.clone();

        let session = state.start(profile, fixed_now()).unwrap();
        assert_eq!(session.expires_at - session.started_at, Duration::hours(8));

        let context = state.user_context(fixed_now()).unwrap();
        assert_eq!(context.id, id);
        permission_guard(Some(&context), Permission::PenilaianCreate).assert_allowed();

        let late = state
            .user_context(fixed_now() + Duration::hours(8))
            .unwrap();
        permission_guard(Some(&late), Permission::PenilaianCreate)
            .assert_denied_with("User not authenticated");
    }

    #[test]
    fn test_inactive_profile_cannot_log_in() {
        let mut system = AccessSystem::new(&Config::default()).unwrap();
        let err = system
            .login(ProfileFactory::inactive(Role::Mahasiswa), fixed_now())
            .unwrap_err();

        assert!(matches!(err, AccessError::Auth(_)));
        assert!(system.context(fixed_now()).is_none());
    }

    #[test]
    fn test_relogin_replaces_session() {
        let mut system = AccessSystem::new(&Config::default()).unwrap();
        let first = system
            .login(ProfileFactory::create(Role::Mahasiswa), fixed_now())
            .unwrap()
            .session_id;
        let second = system
            .login(ProfileFactory::create(Role::Laboran), fixed_now())
            .unwrap()
            .session_id;

        assert_ne!(first, second);
        assert_eq!(system.context(fixed_now()).unwrap().role, Role::Laboran);
        assert!(system.logout().is_some());
        assert!(system.logout().is_none());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let mut state = SessionState::new(&SessionConfig::default()).unwrap();
        let session = state
            .start(ProfileFactory::create(Role::Admin), fixed_now())
            .unwrap();

        let json = serde_json::to_value(session).unwrap();
        assert!(json.get("sessionId").is_some());
        assert!(json.get("expiresAt").is_some());
        assert_eq!(json["user"]["role"], "admin");
    }
}
