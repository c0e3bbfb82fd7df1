// src/poller/status.rs

//! Status translation stage.

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{HomeworkStatus, StatusReport};

/// Translate one homework record into a [`StatusReport`].
///
/// Pure function: never returns a partial report and performs no I/O.
pub fn parse_status(record: &Value) -> Result<StatusReport> {
    let fields = record.as_object().ok_or(AppError::EmptyRecord)?;
    if fields.is_empty() {
        return Err(AppError::EmptyRecord);
    }

    let homework_name = fields
        .get("homework_name")
        .ok_or_else(|| AppError::missing_key("homework_name"))?
        .as_str()
        .ok_or_else(|| AppError::type_mismatch("\"homework_name\" is not a string"))?;

    let status = fields
        .get("status")
        .ok_or_else(|| AppError::missing_key("status"))?
        .as_str()
        .ok_or_else(|| AppError::type_mismatch("\"status\" is not a string"))?
        .parse::<HomeworkStatus>()?;

    Ok(StatusReport::new(homework_name, status))
}
