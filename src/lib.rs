//! # lab-access
//!
//! Role-based access control for a laboratory management system.
//!
//! ## Features
//!
//! - **Permission registry**: typed `resource:action` permissions and named groups
//! - **Role registry**: admin, dosen, laboran and mahasiswa with a privilege hierarchy
//! - **Guards**: pure checks answering with a [`GuardResult`]
//! - **Routes and sessions**: navigation rules and an explicit session lifecycle
//! - **RLS policies**: Postgres row level security policies and migration SQL
//!
//! ## Quick Start
//!
//! ```rust
//! use lab_access::auth::guards::permission_guard;
//! use lab_access::{Permission, Role, UserContext};
//!
//! let user = UserContext::for_role("u1", Role::Laboran);
//! let result = permission_guard(Some(&user), Permission::PeminjamanApprove);
//! assert!(result.allowed);
//! ```
//!
//! ## Generating policies
//!
//! ```rust
//! use lab_access::storage::rls::{generate_policy_sql, get_policies_by_table};
//!
//! for policy in get_policies_by_table("users") {
//!     println!("{}", generate_policy_sql(policy));
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod storage;
pub mod utils;

// Re-export main types
pub use auth::rbac::{Permission, RbacSystem, Role};
pub use auth::{AccessSystem, GuardResult, UserContext};
pub use config::Config;
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
