// src/error.rs

//! Unified error handling for the bot.

use thiserror::Error;

/// Result type alias for bot operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Review API unreachable or returned a non-success status
    #[error("endpoint error: {0}")]
    Endpoint(String),

    /// Review API returned HTTP 200 with an undecodable body
    #[error("malformed response body: {0}")]
    MalformedResponse(String),

    /// A value in the response had the wrong shape
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A required field was absent from the response
    #[error("missing key: {0}")]
    MissingKey(String),

    /// The homeworks collection was empty
    #[error("homework list is empty")]
    EmptyList,

    /// A single homework record was empty
    #[error("homework record is empty")]
    EmptyRecord,

    /// Status code outside the documented enumeration
    #[error("undocumented homework status: {0}")]
    UndocumentedStatus(String),

    /// The outbound Telegram message could not be sent
    #[error("notification delivery failed: {0}")]
    NotificationDelivery(#[source] teloxide::RequestError),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Create an endpoint error.
    pub fn endpoint(message: impl Into<String>) -> Self {
        Self::Endpoint(message.into())
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::TypeMismatch(message.into())
    }

    /// Create a missing key error.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey(key.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
