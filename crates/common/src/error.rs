use thiserror::Error;

/// Every failure the bot can run into.
///
/// Only [`BotError::Config`] is fatal. Everything else is caught by the
/// polling loop, logged, and relayed to the chat, so the `Display` text is
/// written for the person reading the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Ошибка подключения к эндпоинту: {0}")]
    Transport(String),

    #[error("Статус сервера: {status}")]
    StatusCode { status: u16 },

    #[error("Ответ API не соответствует документации: {0}")]
    Shape(String),

    #[error("В ответе API нет ключа \"{0}\"")]
    MissingKey(&'static str),

    #[error("Неожиданный статус домашней работы: {0}")]
    UnknownVerdict(String),

    #[error("Не удалось отправить сообщение: {0}")]
    Delivery(String),
}

impl BotError {
    /// Whether the process must stop instead of retrying on the next cycle.
    pub fn is_fatal(&self) -> bool {
        matches!(self, BotError::Config(_))
    }

    /// Short machine-friendly name for structured log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            BotError::Config(_) => "config",
            BotError::Transport(_) => "transport",
            BotError::StatusCode { .. } => "status_code",
            BotError::Shape(_) => "shape",
            BotError::MissingKey(_) => "missing_key",
            BotError::UnknownVerdict(_) => "unknown_verdict",
            BotError::Delivery(_) => "delivery",
        }
    }
}
