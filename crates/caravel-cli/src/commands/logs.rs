//! Logs command implementation.
//!
//! Resolves the user's time expressions, builds the validated query, and
//! drives a tail session against the injected log source.

use std::io::Write;

use chrono::Utc;

use caravel_logs::{timespec, LogQuery, LogSource, TailSession};

use crate::cli::LogsArgs;
use crate::error::CliError;

/// Handler for the logs command.
pub struct LogsCommand;

impl LogsCommand {
    /// Creates a new logs command handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Executes the logs command against the given source.
    ///
    /// Configuration errors (bad time expressions, `--follow` with `--end`)
    /// surface here, before any fetch is attempted.
    ///
    /// # Errors
    ///
    /// Returns error if the query is invalid, a fetch fails, or output
    /// cannot be written.
    pub async fn execute<W: Write, S: LogSource>(
        &self,
        out: &mut W,
        source: S,
        args: &LogsArgs,
    ) -> Result<(), CliError> {
        let query = build_query(args)?;
        let mut session = TailSession::new(source, query);
        session.run(out).await?;
        Ok(())
    }
}

impl Default for LogsCommand {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the sealed query from raw arguments. Time expressions are
/// resolved once, against a single "now".
fn build_query(args: &LogsArgs) -> Result<LogQuery, CliError> {
    let now = Utc::now();
    let start = timespec::resolve(args.start.as_deref().unwrap_or(""), now)?;
    let end = timespec::resolve(args.end.as_deref().unwrap_or(""), now)?;

    let mut builder = LogQuery::builder(&args.group)
        .streams(args.tasks.iter().cloned())
        .start(start)
        .end(end)
        .follow(args.follow);
    if let Some(filter) = &args.filter {
        builder = builder.filter(filter);
    }

    Ok(builder.build()?)
}
