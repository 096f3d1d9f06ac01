//! Core types for the log-tailing engine.
//!
//! This module provides:
//! - [`LogQuery`] — Sealed configuration for one tail invocation
//! - [`LogQueryBuilder`] — Validating builder for [`LogQuery`]
//! - [`LogEvent`] — One retrieved log line

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{LogError, Result};

/// Sealed configuration for one tail invocation.
///
/// Built once from user input via [`LogQuery::builder`]. Immutable for the
/// lifetime of the invocation, except for the start bound which the follow
/// loop slides forward (see [`crate::tail::TailSession::advance_window`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogQuery {
    /// Log group identifier to query.
    pub group: String,
    /// Stream names to fetch, in display order. Empty means all streams
    /// in the group.
    pub streams: Vec<String>,
    /// Optional filter text forwarded to the source.
    pub filter: Option<String>,
    /// Inclusive lower time bound. `None` means unbounded.
    pub start: Option<DateTime<Utc>>,
    /// Exclusive upper time bound. `None` means unbounded.
    pub end: Option<DateTime<Utc>>,
    /// Whether to keep polling until externally interrupted.
    pub follow: bool,
}

impl LogQuery {
    /// Creates a new query builder for the given log group.
    #[must_use]
    pub fn builder(group: impl Into<String>) -> LogQueryBuilder {
        LogQueryBuilder::new(group)
    }
}

/// Builder for constructing a validated [`LogQuery`].
#[derive(Debug, Clone, Default)]
pub struct LogQueryBuilder {
    group: String,
    streams: Vec<String>,
    filter: Option<String>,
    start: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
    follow: bool,
}

impl LogQueryBuilder {
    /// Creates a builder for the given log group.
    #[must_use]
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            ..Self::default()
        }
    }

    /// Adds a stream name. Order of addition is the display order.
    #[must_use]
    pub fn stream(mut self, name: impl Into<String>) -> Self {
        self.streams.push(name.into());
        self
    }

    /// Adds several stream names at once.
    #[must_use]
    pub fn streams<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.streams.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the filter text.
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the lower time bound.
    #[must_use]
    pub const fn start(mut self, start: Option<DateTime<Utc>>) -> Self {
        self.start = start;
        self
    }

    /// Sets the upper time bound.
    #[must_use]
    pub const fn end(mut self, end: Option<DateTime<Utc>>) -> Self {
        self.end = end;
        self
    }

    /// Enables or disables follow mode.
    #[must_use]
    pub const fn follow(mut self, follow: bool) -> Self {
        self.follow = follow;
        self
    }

    /// Builds the query, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidQuery`] if the group is empty or if
    /// follow mode is combined with an end bound.
    pub fn build(self) -> Result<LogQuery> {
        if self.group.is_empty() {
            return Err(LogError::InvalidQuery("log group must not be empty".to_string()));
        }
        if self.follow && self.end.is_some() {
            return Err(LogError::InvalidQuery(
                "follow cannot be combined with an end time".to_string(),
            ));
        }

        Ok(LogQuery {
            group: self.group,
            streams: self.streams,
            filter: self.filter,
            start: self.start,
            end: self.end,
            follow: self.follow,
        })
    }
}

/// One retrieved log line.
///
/// Ephemeral: produced per poll, checked against the seen-cache, displayed,
/// and dropped. The `id` is unique per occurrence and assigned by the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEvent {
    /// Name of the stream that produced this line.
    pub stream: String,
    /// Source-assigned event identifier, unique per occurrence.
    pub id: String,
    /// The log message text.
    pub message: String,
}

impl LogEvent {
    /// Creates a new log event.
    #[must_use]
    pub fn new(
        stream: impl Into<String>,
        id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            stream: stream.into(),
            id: id.into(),
            message: message.into(),
        }
    }
}
