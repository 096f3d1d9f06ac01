//! Caravel CLI binary entrypoint.
//!
//! This is the main entry point for the `caravel` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use caravel_cli::cli::{Cli, Commands};
use caravel_cli::commands::LogsCommand;
use caravel_cli::source::CloudWatchSource;

fn main() -> ExitCode {
    // Initialize tracing; stdout stays reserved for log event output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), caravel_cli::CliError> {
    let mut stdout = io::stdout().lock();

    match cli.command {
        Commands::Logs(args) => {
            let source = CloudWatchSource::connect(cli.region).await;
            let cmd = LogsCommand::new();
            cmd.execute(&mut stdout, source, &args).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_logs() {
        let cli = Cli::parse_from(["caravel", "logs", "caravel/web"]);
        assert!(matches!(cli.command, Commands::Logs(_)));
    }

    #[test]
    fn cli_respects_region_flag() {
        let cli = Cli::parse_from(["caravel", "--region", "eu-west-1", "logs", "caravel/web"]);
        assert_eq!(cli.region.as_deref(), Some("eu-west-1"));
    }
}
