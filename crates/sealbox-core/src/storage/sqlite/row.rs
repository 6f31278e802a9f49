//! Blob row type for database queries.

use chrono::{DateTime, Utc};

use crate::error::{Result, SealboxError};
use crate::storage::types::BlobRecord;

/// Column list shared by every SELECT, in `BlobRow::from_row` order.
pub(super) const BLOB_COLUMNS: &str =
    "id, ciphertext_b64, filename, note, algorithm, kdf, owner, created_at";

/// Raw row data from the encrypted_blobs table, before parsing into domain types.
#[derive(Debug)]
pub struct BlobRow {
    pub id: i64,
    pub ciphertext_b64: String,
    pub filename: Option<String>,
    pub note: Option<String>,
    pub algorithm: String,
    pub kdf: String,
    pub owner: Option<String>,
    pub created_at: String,
}

impl BlobRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            ciphertext_b64: row.get(1)?,
            filename: row.get(2)?,
            note: row.get(3)?,
            algorithm: row.get(4)?,
            kdf: row.get(5)?,
            owner: row.get(6)?,
            created_at: row.get(7)?,
        })
    }
}

impl TryFrom<BlobRow> for BlobRecord {
    type Error = SealboxError;

    fn try_from(row: BlobRow) -> Result<Self> {
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| SealboxError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(BlobRecord {
            id: row.id,
            ciphertext_b64: row.ciphertext_b64,
            filename: row.filename,
            note: row.note,
            algorithm: row.algorithm,
            kdf: row.kdf,
            owner: row.owner,
            created_at,
        })
    }
}
