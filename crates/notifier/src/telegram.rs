//! Telegram Bot API delivery via `sendMessage`.
//! Docs: <https://core.telegram.org/bots/api#sendmessage>

use async_trait::async_trait;
use serde::Deserialize;

use herald_common::BotError;

use crate::Notifier;

/// Bot API response envelope. Only the fields needed to judge success.
#[derive(Debug, Deserialize)]
struct TgResponse {
    ok: bool,
    description: Option<String>,
}

/// Sends plain-text messages through a Telegram bot.
pub struct TelegramNotifier {
    client: reqwest::Client,
    send_url: String,
}

impl TelegramNotifier {
    /// `api_url` is the Bot API base, normally `https://api.telegram.org`.
    pub fn new(api_url: &str, bot_token: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            send_url: format!("{}/bot{}/sendMessage", api_url.trim_end_matches('/'), bot_token),
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), BotError> {
        let body = serde_json::json!({
            "chat_id": chat_id,
            "text": text,
        });

        let resp = self
            .client
            .post(&self.send_url)
            .json(&body)
            .send()
            .await
            // The request URL embeds the bot token.
            .map_err(|e| BotError::Delivery(e.without_url().to_string()))?;

        let status = resp.status();
        let envelope: TgResponse = resp
            .json()
            .await
            .map_err(|_| BotError::Delivery(format!("Telegram API вернул {status}")))?;

        if !envelope.ok {
            return Err(BotError::Delivery(
                envelope
                    .description
                    .unwrap_or_else(|| format!("Telegram API вернул {status}")),
            ));
        }

        Ok(())
    }
}
