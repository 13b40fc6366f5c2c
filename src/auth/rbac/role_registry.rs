//! Role registry
//!
//! The four laboratory roles and the fixed permission set each one owns.

use super::permission_registry::Permission;
use super::permission_registry::Permission::*;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Laboratory system role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Dosen,
    Laboran,
    Mahasiswa,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Admin, Role::Dosen, Role::Laboran, Role::Mahasiswa];

    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Dosen => "dosen",
            Role::Laboran => "laboran",
            Role::Mahasiswa => "mahasiswa",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Dosen => "Dosen",
            Role::Laboran => "Laboran",
            Role::Mahasiswa => "Mahasiswa",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Role::Admin => {
                "Akses penuh ke semua fitur sistem termasuk manajemen user dan pengaturan sistem"
            }
            Role::Dosen => {
                "Mengelola mata kuliah, jadwal praktikum, presensi mahasiswa, dan penilaian"
            }
            Role::Laboran => "Mengelola inventaris alat laboratorium dan persetujuan peminjaman",
            Role::Mahasiswa => {
                "Mengakses jadwal, materi, mengumpulkan laporan, dan melihat nilai"
            }
        }
    }

    /// Position in the role hierarchy; higher outranks lower
    pub const fn level(self) -> u8 {
        match self {
            Role::Admin => 4,
            Role::Dosen => 3,
            Role::Laboran => 2,
            Role::Mahasiswa => 1,
        }
    }

    pub fn permissions(self) -> &'static [Permission] {
        get_role_permissions(self)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| AccessError::parsing(format!("Unknown role: {}", s)))
    }
}

// User, lab, academic and system management plus read access to the rest
const ADMIN_PERMISSIONS: &[Permission] = &[
    UserCreate,
    UserRead,
    UserUpdate,
    UserDelete,
    LabCreate,
    LabRead,
    LabUpdate,
    LabDelete,
    MataKuliahCreate,
    MataKuliahRead,
    MataKuliahUpdate,
    MataKuliahDelete,
    JadwalCreate,
    JadwalRead,
    JadwalUpdate,
    JadwalDelete,
    SystemAdmin,
    SystemReports,
    SystemSettings,
    SystemAudit,
    InventarisRead,
    PeminjamanRead,
    PresensiRead,
    LaporanRead,
    PenilaianRead,
];

const DOSEN_PERMISSIONS: &[Permission] = &[
    // own courses only
    MataKuliahRead,
    MataKuliahUpdate,
    JadwalCreate,
    JadwalRead,
    JadwalUpdate,
    PresensiCreate,
    PresensiRead,
    PresensiUpdate,
    LaporanRead,
    LaporanReview,
    PenilaianCreate,
    PenilaianRead,
    PenilaianUpdate,
    PenilaianDelete,
    // borrowing requests only, no approval
    PeminjamanCreate,
    PeminjamanRead,
    LabRead,
    InventarisRead,
];

const LABORAN_PERMISSIONS: &[Permission] = &[
    InventarisCreate,
    InventarisRead,
    InventarisUpdate,
    InventarisDelete,
    PeminjamanCreate,
    PeminjamanRead,
    PeminjamanUpdate,
    PeminjamanDelete,
    PeminjamanApprove,
    LabRead,
    LabUpdate,
    JadwalRead,
    UserRead,
    MataKuliahRead,
];

const MAHASISWA_PERMISSIONS: &[Permission] = &[
    JadwalRead,
    MataKuliahRead,
    // own attendance, grades and reports; reports editable until reviewed
    PresensiRead,
    PenilaianRead,
    LaporanCreate,
    LaporanRead,
    LaporanUpdate,
    LabRead,
    InventarisRead,
];

/// Static role table lookup
pub fn get_role_permissions(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN_PERMISSIONS,
        Role::Dosen => DOSEN_PERMISSIONS,
        Role::Laboran => LABORAN_PERMISSIONS,
        Role::Mahasiswa => MAHASISWA_PERMISSIONS,
    }
}

/// Lookup by raw role name.
///
/// An unrecognized name yields an empty slice, which fails every permission
/// check.
pub fn role_permissions_by_name(name: &str) -> &'static [Permission] {
    match name.parse::<Role>() {
        Ok(role) => get_role_permissions(role),
        Err(_) => {
            warn!("Unknown role '{}' resolved to an empty permission set", name);
            &[]
        }
    }
}

pub fn role_has_permission(role: Role, permission: Permission) -> bool {
    get_role_permissions(role).contains(&permission)
}

pub fn role_has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    let granted = get_role_permissions(role);
    permissions.iter().any(|permission| granted.contains(permission))
}

pub fn role_has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    let granted = get_role_permissions(role);
    permissions.iter().all(|permission| granted.contains(permission))
}

/// Roles whose table contains `permission`, in hierarchy order
pub fn roles_with_permission(permission: Permission) -> Vec<Role> {
    Role::ALL
        .iter()
        .copied()
        .filter(|role| role_has_permission(*role, permission))
        .collect()
}

pub fn all_roles() -> &'static [Role] {
    Role::ALL
}

pub fn is_valid_role(name: &str) -> bool {
    name.parse::<Role>().is_ok()
}

pub fn has_higher_role(user_role: Role, target_role: Role) -> bool {
    user_role.level() > target_role.level()
}

pub fn has_equal_or_higher_role(user_role: Role, target_role: Role) -> bool {
    user_role.level() >= target_role.level()
}
