// src/config.rs

//! Startup configuration read from the environment.
//!
//! The three credentials are required and checked once at startup; the
//! process must not enter the poll loop if any of them is absent.

use std::env;

use crate::error::{AppError, Result};

/// Credentials required to run the bot.
#[derive(Debug, Clone)]
pub struct Settings {
    /// OAuth token for the homework review API
    pub practicum_token: String,

    /// Telegram bot token from @BotFather
    pub telegram_token: String,

    /// Destination chat identifier
    pub telegram_chat_id: String,
}

impl Settings {
    /// Read all required variables from the environment.
    ///
    /// Every missing or empty variable is reported with its own
    /// critical-level log line before the error is returned, so the
    /// operator sees the full list at once.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let practicum_token = require(&lookup, "PRACTICUM_TOKEN");
        let telegram_token = require(&lookup, "TELEGRAM_TOKEN");
        let telegram_chat_id = require(&lookup, "TELEGRAM_CHAT_ID");

        match (practicum_token, telegram_token, telegram_chat_id) {
            (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) => Ok(Self {
                practicum_token,
                telegram_token,
                telegram_chat_id,
            }),
            _ => Err(AppError::config(
                "required environment variables are missing",
            )),
        }
    }
}

/// Fetch one required variable, logging when it is missing or empty.
fn require(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            log::error!("missing required environment variable: {name}");
            None
        }
    }
}
