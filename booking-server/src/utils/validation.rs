//! Request field validation helpers

use shared::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_NOTE_LEN: usize = 500;

/// Require a non-empty trimmed string within the length bound
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{} must not be empty", field)));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{} exceeds {} characters",
            field, max_len
        )));
    }
    Ok(())
}

/// Length-check an optional free-text field
pub fn validate_optional_text(value: Option<&str>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(text) = value {
        if text.len() > max_len {
            return Err(AppError::validation(format!(
                "{} exceeds {} characters",
                field, max_len
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Riad Fès", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text("   ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(201), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(Some("window seat"), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(Some(&"x".repeat(501)), "notes", MAX_NOTE_LEN).is_err());
    }
}
