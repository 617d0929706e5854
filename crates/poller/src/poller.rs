use std::time::Duration;

use chrono::Utc;

use herald_common::BotError;
use herald_engine::{ChangeTracker, check_response, failure_message, parse_status};
use herald_notifier::{Notifier, send_message};

use crate::client::HomeworkSource;

/// Poll-compare-notify loop for a single user's homework statuses.
///
/// Owns the only mutable state of the bot: the poll cursor and the
/// duplicate-suppression tracker.
pub struct StatusPoller<S, N> {
    source: S,
    notifier: N,
    chat_id: String,
    retry_period: Duration,
    /// Lower bound (unix seconds) of the next fetch window.
    cursor: u64,
    tracker: ChangeTracker,
}

impl<S, N> StatusPoller<S, N>
where
    S: HomeworkSource,
    N: Notifier,
{
    /// Create a poller whose first fetch window starts now.
    pub fn new(source: S, notifier: N, chat_id: impl Into<String>, retry_period: Duration) -> Self {
        Self {
            source,
            notifier,
            chat_id: chat_id.into(),
            retry_period,
            cursor: u64::try_from(Utc::now().timestamp()).unwrap_or(0),
            tracker: ChangeTracker::new(),
        }
    }

    /// Start from an explicit cursor instead of the current time.
    pub fn with_cursor(mut self, cursor: u64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// Text of the last status message that was delivered.
    pub fn last_notified(&self) -> Option<&str> {
        self.tracker.last_notified()
    }

    /// Poll forever, sleeping the fixed retry period between iterations.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            retry_period_secs = self.retry_period.as_secs(),
            "Status poller started"
        );

        loop {
            // Failures are already logged and relayed inside poll_once.
            let _ = self.poll_once().await;

            tokio::time::sleep(self.retry_period).await;
            tracing::debug!("Retry period elapsed");
        }
    }

    /// Run one fetch-validate-notify iteration.
    ///
    /// A failure is logged and relayed to the chat (unless the same text
    /// was relayed on the previous failing iteration) and then returned.
    pub async fn poll_once(&mut self) -> Result<(), BotError> {
        match self.check_updates().await {
            Ok(()) => {
                self.tracker.clear_failure();
                Ok(())
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    kind = e.kind(),
                    cursor = self.cursor,
                    "Polling iteration failed"
                );

                let message = failure_message(&e);
                if !self.tracker.should_report_failure(&message) {
                    tracing::debug!("Failure already reported, not relaying again");
                } else if send_message(&self.notifier, &self.chat_id, &message).await {
                    self.tracker.record_failure(message);
                }

                Err(e)
            }
        }
    }

    async fn check_updates(&mut self) -> Result<(), BotError> {
        let body = self.source.get_api_answer(self.cursor).await?;
        let answer = check_response(&body)?;

        if let Some(current_date) = answer.current_date {
            self.cursor = current_date;
        }

        let Some(homework) = answer.latest.as_ref() else {
            tracing::debug!("No updates");
            return Ok(());
        };

        let message = parse_status(homework)?;
        if !self.tracker.is_new(&message) {
            tracing::debug!("Homework status unchanged");
            return Ok(());
        }

        if send_message(&self.notifier, &self.chat_id, &message).await {
            self.tracker.record_sent(message);
        }
        Ok(())
    }
}
