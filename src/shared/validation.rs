//! Field validation rules shared by the request payloads.

use crate::shared::error::SharedError;

/// Longest password bcrypt hashes without truncation.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Reject values that are empty or only whitespace.
pub fn require_non_blank(field: &str, value: &str, message: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, message));
    }
    Ok(())
}

/// Check whether a username is acceptable
///
/// Any non-blank name is accepted. Uniqueness is left to the store.
pub fn is_valid_username(username: &str) -> bool {
    !username.trim().is_empty()
}

pub fn validate_username(username: &str) -> Result<(), SharedError> {
    require_non_blank("username", username, "Username cannot be empty")
}

pub fn validate_password(password: &str) -> Result<(), SharedError> {
    if password.is_empty() {
        return Err(SharedError::validation("password", "Password cannot be empty"));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            format!("Password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}
