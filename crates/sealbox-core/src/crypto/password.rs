//! Password acceptance at the encryption boundary.

use crate::error::{Result, SealboxError};

/// Validate a password before it is used to encrypt.
///
/// Only the empty string is refused. Strength is the caller's business;
/// a forgotten password cannot be recovered either way.
///
/// # Examples
///
/// ```
/// use sealbox_core::crypto::validate_password;
///
/// assert!(validate_password("x").is_ok());
/// assert!(validate_password("").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(SealboxError::InvalidInput("Password required".to_string()));
    }
    Ok(())
}
