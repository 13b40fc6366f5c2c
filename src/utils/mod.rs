//! Utility modules for lab-access
//!
//! - **error**: Error type and helpers
//! - **logging**: Subscriber setup and security events

pub mod error;
pub mod logging;
