//! The poll-and-merge tail loop.
//!
//! [`TailSession`] owns everything one invocation needs: the sealed query,
//! the seen-event cache, and the color map. Non-follow mode performs exactly
//! one fetch cycle; follow mode repeats on a fixed one-second tick, sliding
//! the window's start bound forward while never exceeding "now", until the
//! process is interrupted externally.
//!
//! The loop is a single task. There is no fan-out per stream (one fetch
//! covers all configured streams) and no work happens concurrently with
//! the inter-tick sleep.

use std::io::Write;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::color::{self, StreamColors};
use crate::dedup::SeenEventCache;
use crate::error::Result;
use crate::source::LogSource;
use crate::types::{LogEvent, LogQuery};

/// Fixed interval between follow-mode polls.
pub const FOLLOW_INTERVAL: Duration = Duration::from_secs(1);

/// How far behind "now" the start bound trails while following. The lag
/// keeps late-arriving events inside the window; the seen-cache suppresses
/// the resulting re-fetches.
pub const FOLLOW_LAG_SECONDS: i64 = 10;

/// An event that survived deduplication, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailedEvent {
    /// Stream that produced the event.
    pub stream: String,
    /// The log message text.
    pub message: String,
    /// Palette index assigned to the stream.
    pub color: usize,
}

/// One invocation's tail state: query, dedup cache, and color assignments.
///
/// Constructed once by the caller and driven either through [`run`] or,
/// for finer control, [`poll_once`] and [`advance_window`].
///
/// [`run`]: TailSession::run
/// [`poll_once`]: TailSession::poll_once
/// [`advance_window`]: TailSession::advance_window
pub struct TailSession<S> {
    source: S,
    query: LogQuery,
    seen: SeenEventCache,
    colors: StreamColors,
}

impl<S: LogSource> TailSession<S> {
    /// Creates a session for the given source and query.
    #[must_use]
    pub fn new(source: S, query: LogQuery) -> Self {
        Self {
            source,
            query,
            seen: SeenEventCache::default(),
            colors: StreamColors::new(),
        }
    }

    /// Returns the query, including the current (possibly slid) start bound.
    #[must_use]
    pub const fn query(&self) -> &LogQuery {
        &self.query
    }

    /// Performs one fetch across all configured streams and returns the
    /// events that survived deduplication, in display order.
    ///
    /// Display order is stream-by-stream in the configured stream order,
    /// keeping source order within each stream. There is no global
    /// timestamp merge across streams. With no configured streams, source
    /// order is passed through untouched.
    ///
    /// # Errors
    ///
    /// Propagates any fetch error from the source; fetch errors are fatal
    /// for the invocation.
    pub async fn poll_once(&mut self) -> Result<Vec<TailedEvent>> {
        let events = self.source.fetch_logs(&self.query).await?;
        debug!(fetched = events.len(), group = %self.query.group, "poll cycle");
        Ok(self.sift(events))
    }

    /// Runs dedup and color assignment over one fetch's events.
    fn sift(&mut self, events: Vec<LogEvent>) -> Vec<TailedEvent> {
        let mut surviving = Vec::new();

        if self.query.streams.is_empty() {
            for event in events {
                self.admit(event, &mut surviving);
            }
            return surviving;
        }

        let streams = self.query.streams.clone();
        for stream in &streams {
            for event in events.iter().filter(|e| &e.stream == stream) {
                self.admit(event.clone(), &mut surviving);
            }
        }
        surviving
    }

    /// Admits an event if its id has not been displayed before.
    fn admit(&mut self, event: LogEvent, out: &mut Vec<TailedEvent>) {
        if self.seen.seen(&event.id) {
            return;
        }
        let color = self.colors.color_index(&event.stream);
        out.push(TailedEvent {
            stream: event.stream,
            message: event.message,
            color,
        });
    }

    /// Slides the start bound to `now - 10s` if that is later than the
    /// current bound. The window only ever moves forward.
    pub fn advance_window(&mut self, now: DateTime<Utc>) {
        let candidate = now - chrono::Duration::seconds(FOLLOW_LAG_SECONDS);
        if self.query.start.is_none_or(|current| candidate > current) {
            debug!(start = %candidate, "window advanced");
            self.query.start = Some(candidate);
        }
    }

    /// Runs the session to completion, writing surviving events to `out`.
    ///
    /// Non-follow mode performs exactly one fetch cycle and returns.
    /// Follow mode polls forever on a one-second tick and only returns on
    /// error; termination is an external signal.
    ///
    /// # Errors
    ///
    /// Returns the first configuration, fetch, or write error encountered.
    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<()> {
        if self.query.follow {
            self.follow(out).await
        } else {
            let events = self.poll_once().await?;
            emit(out, &events)
        }
    }

    /// The follow loop: fetch, emit, advance, sleep, repeat.
    async fn follow<W: Write>(&mut self, out: &mut W) -> Result<()> {
        // Without an explicit start, follow begins at loop entry.
        if self.query.start.is_none() {
            self.query.start = Some(Utc::now());
        }

        loop {
            let events = self.poll_once().await?;
            emit(out, &events)?;
            self.advance_window(Utc::now());
            tokio::time::sleep(FOLLOW_INTERVAL).await;
        }
    }
}

/// Writes surviving events, stream name painted in its assigned color.
fn emit<W: Write>(out: &mut W, events: &[TailedEvent]) -> Result<()> {
    for event in events {
        writeln!(out, "{} {}", color::paint(&event.stream, event.color), event.message)?;
    }
    out.flush()?;
    Ok(())
}
