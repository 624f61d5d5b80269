//! Logging utilities.
//!
//! This module centralizes logger initialization. It only installs an
//! `env_logger` backend behind the standard `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
