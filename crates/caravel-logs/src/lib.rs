//! # caravel-logs
//!
//! Log-tailing engine for Caravel workloads.
//!
//! This crate provides:
//!
//! - [`LogQuery`] — Sealed per-invocation query configuration
//! - [`LogEvent`] — One retrieved log line
//! - [`timespec`] — Relative/absolute time expression resolution
//! - [`SeenEventCache`] — Bounded LRU dedup across overlapping poll windows
//! - [`StreamColors`] — Stable per-stream display colors
//! - [`LogSource`] — The injected log source contract
//! - [`TailSession`] — The poll-and-merge / follow loop
//!
//! ## Example
//!
//! ```rust,no_run
//! use caravel_logs::{timespec, LogQuery};
//! use chrono::Utc;
//!
//! # fn main() -> caravel_logs::Result<()> {
//! let now = Utc::now();
//! let query = LogQuery::builder("caravel/web")
//!     .stream("web/1")
//!     .start(timespec::resolve("-1h", now)?)
//!     .follow(true)
//!     .build()?;
//! # let _ = query;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod color;
pub mod dedup;
pub mod error;
pub mod source;
pub mod tail;
pub mod timespec;
pub mod types;

// Re-export main types
pub use color::{StreamColors, PALETTE};
pub use dedup::{SeenEventCache, DEFAULT_SEEN_CAPACITY};
pub use error::{LogError, Result};
pub use source::LogSource;
pub use tail::{TailSession, TailedEvent, FOLLOW_INTERVAL, FOLLOW_LAG_SECONDS};
pub use types::{LogEvent, LogQuery, LogQueryBuilder};
