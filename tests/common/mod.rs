//! Common test utilities for lab-access
//!
//! - User, profile and clock fixtures
//! - Guard and SQL assertions
//!
//! # Usage
//!
//! ```rust
//! use crate::common::fixtures::UserFactory;
//!
//! #[test]
//! fn my_test() {
//!     let user = UserFactory::laboran();
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::GuardAssertions;
pub use fixtures::{ProfileFactory, UserFactory, fixed_now};
