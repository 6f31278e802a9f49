//! Error types for Sealbox core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Decryption failures are deliberately collapsed into one variant so the
//! message never reveals whether the password or the blob was at fault.
//! The CLI layer maps these to exit codes.

use thiserror::Error;

use crate::crypto::DecryptError;

/// Result type alias for Sealbox operations.
pub type Result<T> = std::result::Result<T, SealboxError>;

/// Uniform message for every decryption failure.
pub const DECRYPTION_FAILED_MESSAGE: &str = "Decryption failed (bad password or corrupted data)";

/// Core error type for Sealbox operations.
#[derive(Debug, Error)]
pub enum SealboxError {
    /// Malformed blob, wrong password, tampering or bad UTF-8 (never distinguished)
    #[error("{}", DECRYPTION_FAILED_MESSAGE)]
    DecryptionFailed,

    /// Encryption error (RNG unavailable, cipher setup)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Invalid caller input, rejected before any cryptographic work
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing store cannot be reached or is disabled
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Blob record not found by ID
    #[error("Blob not found: {0}")]
    BlobNotFound(i64),
}

impl From<DecryptError> for SealboxError {
    fn from(_: DecryptError) -> Self {
        SealboxError::DecryptionFailed
    }
}

impl SealboxError {
    /// True for errors that only describe the backing store, not the crypto.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            SealboxError::StorageUnavailable(_)
                | SealboxError::Storage(_)
                | SealboxError::Sqlite { .. }
        )
    }
}
