//! Output formatting for pomolock.

use serde::Serialize;

use crate::error::PomolockError;

/// Serialize any value as pretty-printed JSON.
///
/// # Errors
///
/// Returns `PomolockError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomolockError> {
    Ok(serde_json::to_string_pretty(value)?)
}
