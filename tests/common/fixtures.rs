//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use chrono::{DateTime, TimeZone, Utc};
use lab_access::auth::UserProfile;
use lab_access::{Role, UserContext};
use uuid::Uuid;

/// Fixed clock for deterministic session tests
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 2, 12, 8, 0, 0).unwrap()
}

/// Factory for guard contexts
pub struct UserFactory;

impl UserFactory {
    /// Authenticated user carrying the role's permission table
    pub fn with_role(role: Role) -> UserContext {
        UserContext::for_role(Uuid::new_v4().to_string(), role)
    }

    pub fn admin() -> UserContext {
        Self::with_role(Role::Admin)
    }

    pub fn dosen() -> UserContext {
        Self::with_role(Role::Dosen)
    }

    pub fn laboran() -> UserContext {
        Self::with_role(Role::Laboran)
    }

    pub fn mahasiswa() -> UserContext {
        Self::with_role(Role::Mahasiswa)
    }

    /// Same identity with authentication revoked
    pub fn signed_out(role: Role) -> UserContext {
        Self::with_role(role).unauthenticated()
    }
}

/// Factory for provider profiles
pub struct ProfileFactory;

impl ProfileFactory {
    pub fn create(role: Role) -> UserProfile {
        let id = Uuid::new_v4().to_string();
        UserProfile::new(
            id.clone(),
            format!("{}@akbid.ac.id", &id[..8]),
            "Test User",
            role,
        )
    }

    pub fn inactive(role: Role) -> UserProfile {
        let mut profile = Self::create(role);
        profile.is_active = false;
        profile
    }
}
