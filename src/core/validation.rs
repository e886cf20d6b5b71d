//! Input validation for smei operations.
//!
//! Keys and values end up in an environment table, which cannot hold empty
//! names, names containing `=`, or NUL bytes anywhere. These are rejected
//! while loading so that injection itself never fails.

use crate::error::{Result, ValidationError};

/// Validate a merged key as an environment variable name.
///
/// # Errors
///
/// Returns `ValidationError` if the key is empty or contains `=` or NUL.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if let Some((i, ch)) = key.char_indices().find(|(_, ch)| *ch == '=' || *ch == '\0') {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: format!(
                "invalid character {:?} at position {}. Environment variable names cannot contain '=' or NUL",
                ch,
                i + 1
            ),
        }
        .into());
    }

    Ok(())
}

/// Validate a secret value.
///
/// # Errors
///
/// Returns `ValidationError::InvalidValue` if the value contains a NUL byte.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.contains('\0') {
        return Err(ValidationError::InvalidValue(key.to_string()).into());
    }

    Ok(())
}

/// Validate a prefix given on the command line or in `.smei.toml`.
///
/// Prefixes must look like the start of a portable variable name:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError::InvalidPrefix` otherwise.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    let invalid = |reason: String| -> crate::error::Error {
        ValidationError::InvalidPrefix {
            prefix: prefix.to_string(),
            reason,
        }
        .into()
    };

    if prefix.is_empty() {
        return Err(invalid("cannot be empty".to_string()));
    }

    if prefix.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid("cannot start with a digit".to_string()));
    }

    for (i, ch) in prefix.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' {
            return Err(invalid(format!(
                "invalid character '{}' at position {}. Only A-Z, 0-9, and underscore are allowed",
                ch,
                i + 1
            )));
        }
    }

    Ok(())
}
