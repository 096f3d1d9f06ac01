//! # caravel-cli
//!
//! Caravel command-line interface.
//!
//! Provides commands for:
//! - Workload log viewing and tailing
//!
//! # Architecture
//!
//! The CLI builds a sealed [`caravel_logs::LogQuery`] from its arguments
//! and drives a [`caravel_logs::TailSession`] against the
//! [`source::CloudWatchSource`] collaborator. Commands are generic over the
//! [`caravel_logs::LogSource`] trait, so tests inject scripted sources.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod source;

pub use cli::{Cli, Commands, LogsArgs};
pub use error::CliError;
pub use source::CloudWatchSource;
