// src/poller/validate.rs

//! Response validation stage.

use serde_json::Value;

use crate::error::{AppError, Result};

/// Extract the ordered homework records from a decoded API response.
///
/// An empty list is an error, not a "no update": the upstream API always
/// returns the window contents, so an empty window that reached this far
/// is treated as a fault and surfaced to the loop.
pub fn check_response(response: &Value) -> Result<&[Value]> {
    let fields = response
        .as_object()
        .ok_or_else(|| AppError::type_mismatch("top-level response is not a JSON object"))?;

    let homeworks = fields
        .get("homeworks")
        .ok_or_else(|| AppError::missing_key("homeworks"))?;

    let records = homeworks
        .as_array()
        .ok_or_else(|| AppError::type_mismatch("\"homeworks\" is not an array"))?;

    if records.is_empty() {
        return Err(AppError::EmptyList);
    }

    Ok(records)
}
