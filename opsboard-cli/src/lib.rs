//! Opsboard CLI library
//!
//! The `opsboard` binary is a thin shell over these modules so the command
//! logic can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod replay;
pub mod table;

pub use cli::{Cli, Commands};
pub use config::OpsboardConfig;
pub use error::{CliError, Result};
pub use replay::{ReplayEvent, ReplayScript, Session, StepReport};
