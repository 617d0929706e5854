use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;

use herald_common::BotError;

/// Source of raw homework status answers.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch every status change since `from_date` (seconds since epoch).
    ///
    /// The body is returned unmodified; validation is the caller's job.
    async fn get_api_answer(&self, from_date: u64) -> Result<Value, BotError>;
}

/// HTTP client for the Practicum homework status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    auth_header: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            auth_header: format!("OAuth {token}"),
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    async fn get_api_answer(&self, from_date: u64) -> Result<Value, BotError> {
        tracing::debug!(from_date, "Requesting homework statuses");

        let resp = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::AUTHORIZATION, &self.auth_header)
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Homework API request failed");
                BotError::Transport(e.to_string())
            })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!(status = status.as_u16(), "Homework API returned non-200 status");
            return Err(BotError::StatusCode {
                status: status.as_u16(),
            });
        }

        let body: Value = resp.json().await.map_err(|e| {
            tracing::error!(error = %e, "Homework API returned a malformed body");
            BotError::Transport(e.to_string())
        })?;

        tracing::debug!("Homework API answer received");
        Ok(body)
    }
}
