//! Notification delivery.
//!
//! Delivery is best-effort and at-most-once: [`send_message`] logs the
//! outcome and reports success as a plain `bool`, so a failing channel never
//! aborts the polling loop.

pub mod telegram;

use async_trait::async_trait;

use herald_common::BotError;

pub use telegram::TelegramNotifier;

/// A destination that can deliver a text message to a chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, chat_id: &str, text: &str) -> Result<(), BotError>;
}

/// Deliver `text` and swallow any failure.
///
/// Returns `true` when the message was accepted by the channel.
pub async fn send_message<N>(notifier: &N, chat_id: &str, text: &str) -> bool
where
    N: Notifier + ?Sized,
{
    tracing::debug!(chat_id, "Sending message");
    match notifier.notify(chat_id, text).await {
        Ok(()) => {
            tracing::debug!(chat_id, "Message sent");
            true
        }
        Err(e) => {
            tracing::error!(chat_id, error = %e, kind = e.kind(), "Message delivery failed");
            false
        }
    }
}
