//! Error handling for lab-access
//!
//! Guards never fail; they answer with a [`GuardResult`](crate::auth::GuardResult).
//! Errors here cover configuration, session lifecycle and parsing of external input.

mod helpers;
mod types;

pub use types::{AccessError, Result};
