//! Policy catalog for the lab database

use super::expressions::PolicyExpression as Expr;
use super::types::{Policy, PolicyAction};
use once_cell::sync::Lazy;

const MAHASISWA_OWN_ROW: &str =
    "(auth.jwt() ->> 'role' = 'mahasiswa' AND auth.uid() = mahasiswa_id)";

fn admin_or_course_dosen() -> Expr {
    Expr::ADMIN_ALL.or(Expr::DOSEN_OWN_COURSES)
}

fn admin_or_laboran() -> Expr {
    Expr::ADMIN_ALL.or(Expr::LABORAN_LAB_ACCESS)
}

fn admin_dosen_or_own_student() -> Expr {
    admin_or_course_dosen().or(MAHASISWA_OWN_ROW)
}

/// Every policy, grouped by table in migration order
static POLICIES: Lazy<Vec<Policy>> = Lazy::new(|| {
    use PolicyAction::{Delete, Insert, Select, Update};

    vec![
        // users
        Policy::new(
            "users",
            "users_admin_all",
            Select,
            Expr::ADMIN_ALL,
            "Admin can view all users",
        ),
        Policy::new(
            "users",
            "users_own_profile",
            Select,
            Expr::OWN_RECORDS,
            "Users can view their own profile",
        ),
        Policy::new(
            "users",
            "users_update_own",
            Update,
            Expr::OWN_RECORDS,
            "Users can update their own profile",
        ),
        // lab_rooms
        Policy::new(
            "lab_rooms",
            "lab_rooms_read_all",
            Select,
            Expr::AUTHENTICATED_ONLY,
            "All authenticated users can view lab rooms",
        ),
        Policy::new(
            "lab_rooms",
            "lab_rooms_admin_manage",
            Insert,
            Expr::ADMIN_ALL,
            "Only admin can create lab rooms",
        ),
        Policy::new(
            "lab_rooms",
            "lab_rooms_admin_update",
            Update,
            Expr::ADMIN_ALL,
            "Only admin can update lab rooms",
        ),
        // mata_kuliah
        Policy::new(
            "mata_kuliah",
            "mata_kuliah_read_all",
            Select,
            Expr::AUTHENTICATED_ONLY,
            "All users can view mata kuliah",
        ),
        Policy::new(
            "mata_kuliah",
            "mata_kuliah_admin_manage",
            Insert,
            Expr::ADMIN_ALL,
            "Only admin can create mata kuliah",
        ),
        Policy::new(
            "mata_kuliah",
            "mata_kuliah_dosen_update",
            Update,
            Expr::ADMIN_ALL.or("(auth.jwt() ->> 'role' = 'dosen' AND auth.uid() = dosen_id)"),
            "Admin or assigned dosen can update mata kuliah",
        ),
        // jadwal
        Policy::new(
            "jadwal",
            "jadwal_read_all",
            Select,
            Expr::AUTHENTICATED_ONLY,
            "All users can view schedules",
        ),
        Policy::new(
            "jadwal",
            "jadwal_dosen_manage",
            Insert,
            admin_or_course_dosen(),
            "Admin or course dosen can create schedules",
        ),
        Policy::new(
            "jadwal",
            "jadwal_dosen_update",
            Update,
            admin_or_course_dosen(),
            "Admin or course dosen can update schedules",
        ),
        // inventaris
        Policy::new(
            "inventaris",
            "inventaris_read_all",
            Select,
            Expr::AUTHENTICATED_ONLY,
            "All users can view inventory",
        ),
        Policy::new(
            "inventaris",
            "inventaris_laboran_manage",
            Insert,
            admin_or_laboran(),
            "Admin or laboran can manage inventory",
        ),
        Policy::new(
            "inventaris",
            "inventaris_laboran_update",
            Update,
            admin_or_laboran(),
            "Admin or laboran can update inventory",
        ),
        Policy::new(
            "inventaris",
            "inventaris_laboran_delete",
            Delete,
            admin_or_laboran(),
            "Admin or laboran can delete inventory",
        ),
        // peminjaman
        Policy::new(
            "peminjaman",
            "peminjaman_read_own",
            Select,
            admin_or_laboran().or("auth.uid() = peminjam_id"),
            "Admin, laboran, or borrower can view borrowing records",
        ),
        Policy::new(
            "peminjaman",
            "peminjaman_create_own",
            Insert,
            "auth.uid() = peminjam_id",
            "Users can create their own borrowing requests",
        ),
        Policy::new(
            "peminjaman",
            "peminjaman_update_own",
            Update,
            admin_or_laboran().or("(auth.uid() = peminjam_id AND status = 'pending')"),
            "Admin, laboran can update all; users can update own pending requests",
        ),
        // presensi
        Policy::new(
            "presensi",
            "presensi_read_related",
            Select,
            admin_dosen_or_own_student(),
            "Admin, course dosen, or own student can view attendance",
        ),
        Policy::new(
            "presensi",
            "presensi_dosen_manage",
            Insert,
            admin_or_course_dosen(),
            "Admin or course dosen can create attendance records",
        ),
        Policy::new(
            "presensi",
            "presensi_dosen_update",
            Update,
            admin_or_course_dosen(),
            "Admin or course dosen can update attendance",
        ),
        // laporan_mahasiswa
        Policy::new(
            "laporan_mahasiswa",
            "laporan_read_related",
            Select,
            admin_dosen_or_own_student(),
            "Admin, course dosen, or report owner can view reports",
        ),
        Policy::new(
            "laporan_mahasiswa",
            "laporan_mahasiswa_create",
            Insert,
            "auth.jwt() ->> 'role' = 'mahasiswa' AND auth.uid() = mahasiswa_id",
            "Students can create their own reports",
        ),
        Policy::new(
            "laporan_mahasiswa",
            "laporan_mahasiswa_update_own",
            Update,
            admin_or_course_dosen().or(
                "(auth.jwt() ->> 'role' = 'mahasiswa' AND auth.uid() = mahasiswa_id AND status != 'reviewed')",
            ),
            "Admin, dosen can update all; students can update own unreviewed reports",
        ),
        // penilaian
        Policy::new(
            "penilaian",
            "penilaian_read_related",
            Select,
            admin_dosen_or_own_student(),
            "Admin, course dosen, or graded student can view grades",
        ),
        Policy::new(
            "penilaian",
            "penilaian_dosen_manage",
            Insert,
            admin_or_course_dosen(),
            "Admin or course dosen can create grades",
        ),
        Policy::new(
            "penilaian",
            "penilaian_dosen_update",
            Update,
            admin_or_course_dosen(),
            "Admin or course dosen can update grades",
        ),
    ]
});

/// The static policy catalog
pub fn policies() -> &'static [Policy] {
    &POLICIES
}

pub fn get_policies_by_table(table: &str) -> Vec<&'static Policy> {
    POLICIES.iter().filter(|policy| policy.table == table).collect()
}

pub fn get_policies_by_action(action: PolicyAction) -> Vec<&'static Policy> {
    POLICIES
        .iter()
        .filter(|policy| policy.action == action)
        .collect()
}

/// Distinct tables covered by the catalog, in first-appearance order
pub fn policy_tables() -> Vec<&'static str> {
    let mut tables: Vec<&'static str> = Vec::new();
    for policy in POLICIES.iter() {
        if !tables.contains(&policy.table.as_str()) {
            tables.push(&policy.table);
        }
    }
    tables
}

pub fn is_policy_table(table: &str) -> bool {
    POLICIES.iter().any(|policy| policy.table == table)
}
