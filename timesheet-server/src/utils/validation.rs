//! Input validation helpers
//!
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use crate::utils::AppError;

/// Entity names: office, workplace, employee, user
pub const MAX_NAME_LEN: usize = 200;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorKind;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Tokyo", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(validate_required_text(&"a".repeat(MAX_NAME_LEN + 1), "name", MAX_NAME_LEN).is_err());
        // counted in characters, not bytes
        assert!(validate_required_text(&"東".repeat(MAX_NAME_LEN), "name", MAX_NAME_LEN).is_ok());
    }
}
