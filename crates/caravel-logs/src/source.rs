//! The external log source contract.
//!
//! The engine never talks to a log service directly; it is handed an
//! implementation of [`LogSource`] by the caller. One fetch call covers all
//! configured streams together; the engine never fans out per stream.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{LogEvent, LogQuery};

/// An injected collaborator that retrieves log events for a query window.
///
/// Implementations must return events for each stream in the order the
/// underlying service produced them; the engine preserves that order within
/// a stream. Errors are opaque to the engine and fatal for the invocation.
#[async_trait]
pub trait LogSource: Send + Sync {
    /// Fetches events matching the query's group, streams, filter text,
    /// and current time window.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::LogError::Source`] on any fetch failure.
    async fn fetch_logs(&self, query: &LogQuery) -> Result<Vec<LogEvent>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LogError;

    /// A source that always returns the same canned batch.
    struct CannedSource {
        events: Vec<LogEvent>,
    }

    #[async_trait]
    impl LogSource for CannedSource {
        async fn fetch_logs(&self, _query: &LogQuery) -> Result<Vec<LogEvent>> {
            Ok(self.events.clone())
        }
    }

    /// A source that always fails.
    struct FailingSource;

    #[async_trait]
    impl LogSource for FailingSource {
        async fn fetch_logs(&self, _query: &LogQuery) -> Result<Vec<LogEvent>> {
            Err(LogError::Source("connection reset".to_string()))
        }
    }

    fn make_query() -> LogQuery {
        LogQuery::builder("caravel/web")
            .stream("web/1")
            .build()
            .expect("should build")
    }

    #[tokio::test]
    async fn canned_source_returns_events() {
        let source = CannedSource {
            events: vec![LogEvent::new("web/1", "evt-1", "hello")],
        };

        let events = source
            .fetch_logs(&make_query())
            .await
            .expect("fetch should succeed");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message, "hello");
    }

    #[tokio::test]
    async fn failing_source_surfaces_opaque_error() {
        let source = FailingSource;
        let result = source.fetch_logs(&make_query()).await;
        assert!(matches!(result, Err(LogError::Source(_))));
    }

    #[test]
    fn trait_object_is_usable() {
        fn assert_object_safe(_source: &dyn LogSource) {}
        let source = FailingSource;
        assert_object_safe(&source);
    }
}
