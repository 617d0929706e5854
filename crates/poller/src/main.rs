use std::time::Duration;

use herald_common::config::{AppConfig, LogConfig};
use herald_common::logging;
use herald_notifier::TelegramNotifier;
use herald_poller::client::PracticumClient;
use herald_poller::poller::StatusPoller;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing; the guard flushes the log file on exit
    let _guard = logging::init(&LogConfig::from_env()?)?;

    tracing::info!("Homework Herald starting...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Required environment variables are missing, exiting");
            return Err(e.into());
        }
    };
    tracing::debug!("Environment variables loaded");

    let source = PracticumClient::new(config.endpoint.clone(), &config.practicum_token);
    let notifier = TelegramNotifier::new(&config.telegram_api_url, &config.telegram_token);
    let mut poller = StatusPoller::new(
        source,
        notifier,
        config.telegram_chat_id.clone(),
        Duration::from_secs(config.retry_period_secs),
    );

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("Homework Herald stopped.");
    Ok(())
}
