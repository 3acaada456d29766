//! Logging setup.
//!
//! The engine only talks to the `log` facade. This module is a convenience
//! for hosts and the testbed that want `env_logger` wired up in one call.

mod init;

pub use init::{init_logging, LoggingConfig};
