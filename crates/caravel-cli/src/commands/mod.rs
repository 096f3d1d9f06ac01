//! CLI command implementations.
//!
//! Each submodule implements a specific CLI command:
//! - [`logs`] - Workload log viewing and tailing

pub mod logs;

pub use logs::LogsCommand;
