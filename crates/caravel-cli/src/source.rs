//! CloudWatch Logs backed implementation of the log source contract.
//!
//! Thin glue: translates the sealed query into `FilterLogEvents` calls and
//! follows the pagination token until the service is drained. Everything
//! interesting (dedup, windowing, ordering) happens in the engine.

use async_trait::async_trait;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::Client;
use tracing::debug;

use caravel_logs::{LogError, LogEvent, LogQuery, LogSource, Result};

/// Log source reading from CloudWatch Logs.
pub struct CloudWatchSource {
    client: Client,
}

impl CloudWatchSource {
    /// Connects using the default SDK configuration chain, with an
    /// optional region override.
    pub async fn connect(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        Self {
            client: Client::new(&config),
        }
    }

    /// Wraps an already-configured client.
    #[must_use]
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LogSource for CloudWatchSource {
    async fn fetch_logs(&self, query: &LogQuery) -> Result<Vec<LogEvent>> {
        let mut events = Vec::new();
        let mut token: Option<String> = None;

        loop {
            let mut request = self
                .client
                .filter_log_events()
                .log_group_name(&query.group);
            if !query.streams.is_empty() {
                request = request.set_log_stream_names(Some(query.streams.clone()));
            }
            if let Some(filter) = &query.filter {
                request = request.filter_pattern(filter);
            }
            if let Some(start) = query.start {
                request = request.start_time(start.timestamp_millis());
            }
            if let Some(end) = query.end {
                request = request.end_time(end.timestamp_millis());
            }
            if let Some(next) = token.take() {
                request = request.next_token(next);
            }

            let output = request
                .send()
                .await
                .map_err(|e| LogError::Source(DisplayErrorContext(&e).to_string()))?;

            debug!(page_events = output.events().len(), "filter_log_events page");
            for event in output.events() {
                events.push(LogEvent::new(
                    event.log_stream_name().unwrap_or_default(),
                    event.event_id().unwrap_or_default(),
                    event.message().unwrap_or_default(),
                ));
            }

            match output.next_token() {
                Some(next) => token = Some(next.to_string()),
                None => break,
            }
        }

        Ok(events)
    }
}
