//! Logging utilities
//!
//! Subscriber initialization and structured security events.

mod init;
mod security_logger;

pub use init::{init_logging, logging_dispatch};
pub use security_logger::{SECURITY_TARGET, SecurityLogger};
