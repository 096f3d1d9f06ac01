//! Command-line argument parsing with clap.

use clap::{Parser, Subcommand};

/// Caravel CLI - deploy and operate containerized workloads.
#[derive(Parser, Debug, Clone)]
#[command(name = "caravel")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AWS region to operate in. Falls back to the SDK's default chain.
    #[arg(short, long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// View logs for a workload's log group.
    Logs(LogsArgs),
}

/// Arguments for the logs command.
#[derive(Parser, Debug, Clone)]
pub struct LogsArgs {
    /// Log group to read from.
    #[arg(required = true)]
    pub group: String,

    /// Task (stream) name to include; repeatable. Order given is display order.
    #[arg(short, long = "task")]
    pub tasks: Vec<String>,

    /// Filter text forwarded to the log source.
    #[arg(long)]
    pub filter: Option<String>,

    /// Start boundary: relative ("-1h", "10m30s") or absolute
    /// ("YYYY-MM-DD HH:MM:SS", optionally with a zone abbreviation).
    #[arg(long, allow_hyphen_values = true)]
    pub start: Option<String>,

    /// End boundary, same formats as --start. Incompatible with --follow.
    #[arg(long, allow_hyphen_values = true)]
    pub end: Option<String>,

    /// Keep polling for new events until interrupted.
    #[arg(short, long)]
    pub follow: bool,
}
