//! Core data types for the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{KdfParams, ALGORITHM_LABEL};
use crate::error::{Result, SealboxError};

/// Server-assigned record identifier.
pub type BlobId = i64;

/// Maximum filename length in characters.
pub const MAX_FILENAME_LEN: usize = 255;
/// Maximum note length in characters.
pub const MAX_NOTE_LEN: usize = 512;
/// Maximum owner length in characters.
pub const MAX_OWNER_LEN: usize = 255;

/// A persisted blob record (also the external view of a stored blob).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobRecord {
    /// Unique, monotonic identifier
    pub id: BlobId,

    /// Base64 blob, stored verbatim
    pub ciphertext_b64: String,

    /// Optional original filename
    pub filename: Option<String>,

    /// Optional free-form note
    pub note: Option<String>,

    /// Cipher label (e.g. "AES-256-GCM")
    pub algorithm: String,

    /// Key-derivation label (e.g. "PBKDF2:100000")
    pub kdf: String,

    /// Optional opaque owner identifier
    pub owner: Option<String>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

/// Abbreviated view used by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobSummary {
    pub id: BlobId,
    pub filename: Option<String>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&BlobRecord> for BlobSummary {
    fn from(record: &BlobRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            note: record.note.clone(),
            created_at: record.created_at,
        }
    }
}

/// Builder for creating new blob records.
#[derive(Debug, Clone)]
pub struct NewBlob {
    /// Base64 blob (not inspected by the store)
    pub ciphertext_b64: String,

    pub filename: Option<String>,

    pub note: Option<String>,

    pub owner: Option<String>,

    /// Cipher label
    pub algorithm: String,

    /// Key-derivation label
    pub kdf: String,
}

impl NewBlob {
    /// Start a record for `ciphertext_b64`, labelled with the deployment's KDF.
    pub fn new(ciphertext_b64: impl Into<String>, kdf: &KdfParams) -> Self {
        Self {
            ciphertext_b64: ciphertext_b64.into(),
            filename: None,
            note: None,
            owner: None,
            algorithm: ALGORITHM_LABEL.to_string(),
            kdf: kdf.label(),
        }
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Check metadata length limits.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::InvalidInput` naming the first field over its limit.
    pub fn validate(&self) -> Result<()> {
        check_len("filename", self.filename.as_deref(), MAX_FILENAME_LEN)?;
        check_len("note", self.note.as_deref(), MAX_NOTE_LEN)?;
        check_len("owner", self.owner.as_deref(), MAX_OWNER_LEN)?;
        Ok(())
    }
}

fn check_len(field: &str, value: Option<&str>, max: usize) -> Result<()> {
    match value {
        Some(v) if v.chars().count() > max => Err(SealboxError::InvalidInput(format!(
            "{} too long (max {} characters)",
            field, max
        ))),
        _ => Ok(()),
    }
}

/// Bound on the number of records a listing may return.
///
/// Always within `[MIN, MAX]`; out-of-range requests are clamped, never rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(u32);

impl ListLimit {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 200;
    pub const DEFAULT: u32 = 50;

    /// Clamp a requested bound into `[1, 200]`.
    pub fn clamped(requested: i64) -> Self {
        let value = requested.clamp(Self::MIN as i64, Self::MAX as i64);
        Self(value as u32)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl From<Option<i64>> for ListLimit {
    fn from(requested: Option<i64>) -> Self {
        requested.map(Self::clamped).unwrap_or_default()
    }
}
