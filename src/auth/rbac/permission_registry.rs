//! Permission registry
//!
//! Every capability in the laboratory system is a `<resource>:<action>` token.
//! The set is closed: [`Permission`] enumerates all registered tokens, so role
//! tables and guards can only ever reference permissions that exist.

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Resource a permission applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    User,
    Lab,
    MataKuliah,
    Jadwal,
    Inventaris,
    Peminjaman,
    Presensi,
    Laporan,
    Penilaian,
    System,
}

impl Resource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::User => "user",
            Resource::Lab => "lab",
            Resource::MataKuliah => "matakuliah",
            Resource::Jadwal => "jadwal",
            Resource::Inventaris => "inventaris",
            Resource::Peminjaman => "peminjaman",
            Resource::Presensi => "presensi",
            Resource::Laporan => "laporan",
            Resource::Penilaian => "penilaian",
            Resource::System => "system",
        }
    }
}

/// Action a permission allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Read,
    Update,
    Delete,
    Approve,
    Review,
    Admin,
    Reports,
    Settings,
    Audit,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Read => "read",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Approve => "approve",
            Action::Review => "review",
            Action::Admin => "admin",
            Action::Reports => "reports",
            Action::Settings => "settings",
            Action::Audit => "audit",
        }
    }
}

macro_rules! permissions {
    ($($variant:ident => $resource:ident, $action:ident, $token:literal, $label:literal;)+) => {
        /// A registered permission token
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Permission {
            $($variant,)+
        }

        impl Permission {
            /// Every registered permission, in registry order
            pub const ALL: &'static [Permission] = &[$(Permission::$variant,)+];

            /// Token form, e.g. `user:create`
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Permission::$variant => $token,)+
                }
            }

            pub const fn resource(self) -> Resource {
                match self {
                    $(Permission::$variant => Resource::$resource,)+
                }
            }

            pub const fn action(self) -> Action {
                match self {
                    $(Permission::$variant => Action::$action,)+
                }
            }

            /// Label shown in the user interface
            pub const fn display_name(self) -> &'static str {
                match self {
                    $(Permission::$variant => $label,)+
                }
            }
        }
    };
}

permissions! {
    UserCreate => User, Create, "user:create", "Buat User";
    UserRead => User, Read, "user:read", "Lihat User";
    UserUpdate => User, Update, "user:update", "Edit User";
    UserDelete => User, Delete, "user:delete", "Hapus User";

    LabCreate => Lab, Create, "lab:create", "Buat Lab";
    LabRead => Lab, Read, "lab:read", "Lihat Lab";
    LabUpdate => Lab, Update, "lab:update", "Edit Lab";
    LabDelete => Lab, Delete, "lab:delete", "Hapus Lab";

    MataKuliahCreate => MataKuliah, Create, "matakuliah:create", "Buat Mata Kuliah";
    MataKuliahRead => MataKuliah, Read, "matakuliah:read", "Lihat Mata Kuliah";
    MataKuliahUpdate => MataKuliah, Update, "matakuliah:update", "Edit Mata Kuliah";
    MataKuliahDelete => MataKuliah, Delete, "matakuliah:delete", "Hapus Mata Kuliah";

    JadwalCreate => Jadwal, Create, "jadwal:create", "Buat Jadwal";
    JadwalRead => Jadwal, Read, "jadwal:read", "Lihat Jadwal";
    JadwalUpdate => Jadwal, Update, "jadwal:update", "Edit Jadwal";
    JadwalDelete => Jadwal, Delete, "jadwal:delete", "Hapus Jadwal";

    InventarisCreate => Inventaris, Create, "inventaris:create", "Tambah Inventaris";
    InventarisRead => Inventaris, Read, "inventaris:read", "Lihat Inventaris";
    InventarisUpdate => Inventaris, Update, "inventaris:update", "Edit Inventaris";
    InventarisDelete => Inventaris, Delete, "inventaris:delete", "Hapus Inventaris";

    PeminjamanCreate => Peminjaman, Create, "peminjaman:create", "Buat Peminjaman";
    PeminjamanRead => Peminjaman, Read, "peminjaman:read", "Lihat Peminjaman";
    PeminjamanUpdate => Peminjaman, Update, "peminjaman:update", "Edit Peminjaman";
    PeminjamanDelete => Peminjaman, Delete, "peminjaman:delete", "Hapus Peminjaman";
    PeminjamanApprove => Peminjaman, Approve, "peminjaman:approve", "Setujui Peminjaman";

    PresensiCreate => Presensi, Create, "presensi:create", "Buat Presensi";
    PresensiRead => Presensi, Read, "presensi:read", "Lihat Presensi";
    PresensiUpdate => Presensi, Update, "presensi:update", "Edit Presensi";
    PresensiDelete => Presensi, Delete, "presensi:delete", "Hapus Presensi";

    LaporanCreate => Laporan, Create, "laporan:create", "Buat Laporan";
    LaporanRead => Laporan, Read, "laporan:read", "Lihat Laporan";
    LaporanUpdate => Laporan, Update, "laporan:update", "Edit Laporan";
    LaporanDelete => Laporan, Delete, "laporan:delete", "Hapus Laporan";
    LaporanReview => Laporan, Review, "laporan:review", "Review Laporan";

    PenilaianCreate => Penilaian, Create, "penilaian:create", "Buat Penilaian";
    PenilaianRead => Penilaian, Read, "penilaian:read", "Lihat Penilaian";
    PenilaianUpdate => Penilaian, Update, "penilaian:update", "Edit Penilaian";
    PenilaianDelete => Penilaian, Delete, "penilaian:delete", "Hapus Penilaian";

    SystemAdmin => System, Admin, "system:admin", "Administrasi Sistem";
    SystemReports => System, Reports, "system:reports", "Laporan Sistem";
    SystemSettings => System, Settings, "system:settings", "Pengaturan Sistem";
    SystemAudit => System, Audit, "system:audit", "Audit Sistem";
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self> {
        Permission::ALL
            .iter()
            .copied()
            .find(|permission| permission.as_str() == s)
            .ok_or_else(|| AccessError::parsing(format!("Unknown permission: {}", s)))
    }
}

impl Serialize for Permission {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Permission {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}

/// Named permission sets used to assemble role tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermissionGroup {
    UserManagement,
    LabManagement,
    AcademicManagement,
    InventoryManagement,
    BorrowingManagement,
    AttendanceManagement,
    ReportManagement,
    GradingManagement,
    SystemManagement,
}

impl PermissionGroup {
    pub const ALL: &'static [PermissionGroup] = &[
        PermissionGroup::UserManagement,
        PermissionGroup::LabManagement,
        PermissionGroup::AcademicManagement,
        PermissionGroup::InventoryManagement,
        PermissionGroup::BorrowingManagement,
        PermissionGroup::AttendanceManagement,
        PermissionGroup::ReportManagement,
        PermissionGroup::GradingManagement,
        PermissionGroup::SystemManagement,
    ];

    pub const fn permissions(self) -> &'static [Permission] {
        use Permission::*;

        match self {
            PermissionGroup::UserManagement => &[UserCreate, UserRead, UserUpdate, UserDelete],
            PermissionGroup::LabManagement => &[LabCreate, LabRead, LabUpdate, LabDelete],
            PermissionGroup::AcademicManagement => &[
                MataKuliahCreate,
                MataKuliahRead,
                MataKuliahUpdate,
                MataKuliahDelete,
                JadwalCreate,
                JadwalRead,
                JadwalUpdate,
                JadwalDelete,
            ],
            PermissionGroup::InventoryManagement => &[
                InventarisCreate,
                InventarisRead,
                InventarisUpdate,
                InventarisDelete,
            ],
            PermissionGroup::BorrowingManagement => &[
                PeminjamanCreate,
                PeminjamanRead,
                PeminjamanUpdate,
                PeminjamanDelete,
                PeminjamanApprove,
            ],
            PermissionGroup::AttendanceManagement => &[
                PresensiCreate,
                PresensiRead,
                PresensiUpdate,
                PresensiDelete,
            ],
            PermissionGroup::ReportManagement => &[
                LaporanCreate,
                LaporanRead,
                LaporanUpdate,
                LaporanDelete,
                LaporanReview,
            ],
            PermissionGroup::GradingManagement => &[
                PenilaianCreate,
                PenilaianRead,
                PenilaianUpdate,
                PenilaianDelete,
            ],
            PermissionGroup::SystemManagement => {
                &[SystemAdmin, SystemReports, SystemSettings, SystemAudit]
            }
        }
    }
}

/// True iff `permission` is a member of `user_permissions`
pub fn has_permission(user_permissions: &[Permission], permission: Permission) -> bool {
    user_permissions.contains(&permission)
}

/// True iff at least one of `permissions` is held; false for an empty list
pub fn has_any_permission(user_permissions: &[Permission], permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .any(|permission| user_permissions.contains(permission))
}

/// True iff every one of `permissions` is held; vacuously true for an empty list
pub fn has_all_permissions(user_permissions: &[Permission], permissions: &[Permission]) -> bool {
    permissions
        .iter()
        .all(|permission| user_permissions.contains(permission))
}

pub fn all_permissions() -> &'static [Permission] {
    Permission::ALL
}

pub fn permissions_by_group(group: PermissionGroup) -> &'static [Permission] {
    group.permissions()
}

pub fn is_valid_permission(token: &str) -> bool {
    token.parse::<Permission>().is_ok()
}

/// UI label for a token; unregistered tokens are returned unchanged
pub fn permission_display_name(token: &str) -> String {
    match token.parse::<Permission>() {
        Ok(permission) => permission.display_name().to_string(),
        Err(_) => token.to_string(),
    }
}

/// Convert a permission list coming from an external session source.
///
/// Unregistered tokens are dropped so they can never satisfy a check.
pub fn parse_permissions<I>(tokens: I) -> Vec<Permission>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut permissions = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match token.parse::<Permission>() {
            Ok(permission) if !permissions.contains(&permission) => permissions.push(permission),
            Ok(_) => {}
            Err(_) => warn!("Dropping unregistered permission token: {}", token),
        }
    }
    permissions
}
