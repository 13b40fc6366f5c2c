//! Integration tests for lab-access
//!
//! These tests drive the public API across module boundaries without mocking.

pub mod config_validation_tests;
pub mod error_handling_tests;
pub mod guard_tests;
pub mod policy_sql_tests;
pub mod route_tests;
pub mod session_tests;
