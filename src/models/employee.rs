use crate::errors::{AppError, AppResult};

/// Placeholder shown first in a name selection list.
/// It is never a valid employee.
pub const NO_SELECTION: &str = "Select your name";

/// Trim a caller-supplied name and reject empty input or the placeholder.
pub fn normalize_name(raw: &str) -> AppResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        Err(AppError::EmptyName)
    } else if name == NO_SELECTION {
        Err(AppError::NoSelection)
    } else {
        Ok(name)
    }
}
