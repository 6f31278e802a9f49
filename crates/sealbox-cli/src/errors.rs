//! CLI error types for structured error handling.
//!
//! Core errors travel through `anyhow` untouched; `exit_code_for` looks
//! through the chain to pick the exit code.

use std::fmt;

use sealbox_core::SealboxError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput(String),

    /// Storage requested but not usable
    StorageUnavailable { message: String, hint: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::StorageUnavailable { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Create a StorageUnavailable error with message and hint.
    pub fn storage_unavailable(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::StorageUnavailable {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::StorageUnavailable { .. } => exit_codes::STORAGE_UNAVAILABLE,
        }
    }
}

/// Exit code for a core error.
pub fn core_exit_code(err: &SealboxError) -> i32 {
    match err {
        SealboxError::BlobNotFound(_) => exit_codes::NOT_FOUND,
        SealboxError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        SealboxError::DecryptionFailed => exit_codes::DECRYPTION_FAILED,
        SealboxError::StorageUnavailable(_) => exit_codes::STORAGE_UNAVAILABLE,
        _ => exit_codes::GENERAL,
    }
}

/// Exit code for any error that reached `main`.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if let Some(cli) = cause.downcast_ref::<CliError>() {
            return cli.exit_code();
        }
        if let Some(core) = cause.downcast_ref::<SealboxError>() {
            return core_exit_code(core);
        }
    }
    exit_codes::GENERAL
}
