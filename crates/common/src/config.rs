use std::path::PathBuf;
use std::str::FromStr;

use crate::error::BotError;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "homework.log";
pub const DEFAULT_LOG_MAX_BYTES: u64 = 50_000_000;
pub const DEFAULT_LOG_BACKUP_COUNT: usize = 5;

/// Secrets that must be present for the bot to start.
pub const REQUIRED_SECRETS: [&str; 3] = ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Application configuration, constructed once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bearer token for the homework API (`Authorization: OAuth <token>`)
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat for every notification
    pub telegram_chat_id: String,

    /// Homework status endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Fixed sleep between polling iterations, in seconds (default: 600, never 0)
    pub retry_period_secs: u64,
}

impl AppConfig {
    /// Load configuration from `.env` (if present) and environment variables.
    pub fn from_env() -> Result<Self, BotError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary secret source.
    ///
    /// Absent and blank secrets are both treated as missing, and every
    /// missing name is reported at once.
    pub fn from_lookup<F>(get_secret: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = |name: &str| {
            get_secret(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&str> = REQUIRED_SECRETS
            .iter()
            .copied()
            .filter(|name| secret(*name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(BotError::Config(format!(
                "не заданы переменные окружения: {}",
                missing.join(", ")
            )));
        }

        let retry_period_secs =
            parse_or(&get_secret, "RETRY_PERIOD_SECS", DEFAULT_RETRY_PERIOD_SECS)?;
        if retry_period_secs == 0 {
            return Err(BotError::Config(
                "RETRY_PERIOD_SECS должно быть больше нуля".to_string(),
            ));
        }

        Ok(Self {
            practicum_token: secret("PRACTICUM_TOKEN").unwrap_or_default(),
            telegram_token: secret("TELEGRAM_TOKEN").unwrap_or_default(),
            telegram_chat_id: secret("TELEGRAM_CHAT_ID").unwrap_or_default(),
            endpoint: secret("PRACTICUM_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            telegram_api_url: secret("TELEGRAM_API_URL")
                .unwrap_or_else(|| DEFAULT_TELEGRAM_API_URL.to_string()),
            retry_period_secs,
        })
    }
}

/// Log file settings. Loaded separately so logging can start before the
/// secrets are checked.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub file: PathBuf,
    /// Rotate once the file would grow beyond this many bytes
    pub max_bytes: u64,
    /// Number of rotated files kept next to the live one
    pub backup_count: usize,
}

impl LogConfig {
    pub fn from_env() -> Result<Self, BotError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(get: F) -> Result<Self, BotError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            file: get("LOG_FILE")
                .filter(|value| !value.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            max_bytes: parse_or(&get, "LOG_MAX_BYTES", DEFAULT_LOG_MAX_BYTES)?,
            backup_count: parse_or(&get, "LOG_BACKUP_COUNT", DEFAULT_LOG_BACKUP_COUNT)?,
        })
    }
}

fn parse_or<F, T>(get: &F, name: &str, default: T) -> Result<T, BotError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(name) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|_| BotError::Config(format!("{name} должно быть целым неотрицательным числом"))),
        _ => Ok(default),
    }
}
