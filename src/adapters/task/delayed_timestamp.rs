//! Stand-in for a slow external call: wait, then report the time.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::ports::{TaskActivity, TaskError};

/// Format of the activity result.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Renders a timestamp the way the activity reports it.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Sleeps for a fixed delay and returns the current UTC time.
///
/// Has no side effects, so replays are harmless.
#[derive(Debug, Clone)]
pub struct DelayedTimestampActivity {
    delay: Duration,
}

impl DelayedTimestampActivity {
    pub const NAME: &'static str = "LongTimeActivity";

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl TaskActivity for DelayedTimestampActivity {
    fn name(&self) -> &str {
        Self::NAME
    }

    async fn run(&self, _input: Option<serde_json::Value>) -> Result<String, TaskError> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Activity waiting");
        tokio::time::sleep(self.delay).await;
        Ok(format_timestamp(Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use std::time::Instant;

    #[test]
    fn format_timestamp_is_stable() {
        let at = Utc.with_ymd_and_hms(2019, 3, 7, 9, 5, 1).unwrap();
        assert_eq!(format_timestamp(at), "2019-03-07 09:05:01 UTC");
    }

    #[tokio::test]
    async fn run_waits_for_delay() {
        let activity = DelayedTimestampActivity::new(Duration::from_millis(20));
        let started = Instant::now();

        activity.run(None).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn run_returns_parseable_timestamp() {
        let activity = DelayedTimestampActivity::new(Duration::ZERO);

        let output = activity.run(None).await.unwrap();

        assert!(NaiveDateTime::parse_from_str(&output, TIMESTAMP_FORMAT).is_ok());
    }

    #[tokio::test]
    async fn run_is_repeatable() {
        let activity = DelayedTimestampActivity::new(Duration::ZERO);

        assert!(activity.run(None).await.is_ok());
        assert!(activity.run(None).await.is_ok());
        assert_eq!(activity.name(), "LongTimeActivity");
    }
}
