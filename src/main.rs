// src/main.rs

//! hwbot: homework review status notifier.
//!
//! Polls the Practicum homework review API on a fixed interval and
//! relays status changes to a Telegram chat. No CLI arguments; all
//! configuration comes from the environment.

use hwbot::config::Settings;
use hwbot::error::Result;
use hwbot::logging;
use hwbot::poller::Poller;
use hwbot::services::{PracticumClient, TelegramNotifier};

#[tokio::main]
async fn main() -> Result<()> {
    // Pick up a local .env before the credential check.
    dotenvy::dotenv().ok();

    logging::init(logging::LOG_FILE)?;

    // Fatal on missing credentials: halt before any network call.
    let settings = Settings::from_env().inspect_err(|_| {
        log::error!("aborted: required credentials are missing");
    })?;

    let client = PracticumClient::new(&settings.practicum_token)?;
    let notifier = TelegramNotifier::new(&settings.telegram_token, &settings.telegram_chat_id)?;
    let poller = Poller::new(client, Box::new(notifier));

    // An interrupt exits immediately; there is nothing to drain.
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            log::info!("interrupt received, exiting");
        }
    }

    Ok(())
}
