//! Storage-side access control
//!
//! Row level security policies enforced by the database.

pub mod rls;
