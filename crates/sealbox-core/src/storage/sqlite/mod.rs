//! SQLite storage backend.
//!
//! Records live in a single `encrypted_blobs` table. The connection sits
//! behind a mutex, so each operation runs alone against the database.

mod row;

use std::fs;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::{SecondsFormat, SubsecRound, Utc};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, SealboxError};
use crate::storage::traits::BlobStore;
use crate::storage::types::{BlobId, BlobRecord, ListLimit, NewBlob};

use row::{BlobRow, BLOB_COLUMNS};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS encrypted_blobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ciphertext_b64 TEXT NOT NULL,
    filename TEXT,
    note TEXT,
    algorithm TEXT NOT NULL DEFAULT 'AES-256-GCM',
    kdf TEXT NOT NULL DEFAULT 'PBKDF2:100000',
    owner TEXT,
    created_at TEXT NOT NULL
);
"#;

/// SQLite-backed blob store.
pub struct SqliteBlobStore {
    conn: Mutex<Connection>,
}

impl SqliteBlobStore {
    /// Open (or create) a database file, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::StorageUnavailable` if the file cannot be opened
    /// or the schema cannot be created.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SealboxError::StorageUnavailable(format!(
                        "Failed to create database directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let conn = Connection::open(path).map_err(|e| {
            SealboxError::StorageUnavailable(format!(
                "Failed to open database {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!(path = %path.display(), "opened blob database");
        Self::from_connection(conn)
    }

    /// Open a private in-memory database (dropped with the store).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| {
            SealboxError::StorageUnavailable(format!("Failed to open in-memory database: {}", e))
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA).map_err(|e| {
            SealboxError::StorageUnavailable(format!("Failed to initialise schema: {}", e))
        })?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| SealboxError::Storage("SQLite connection poisoned".to_string()))
    }
}

impl BlobStore for SqliteBlobStore {
    fn create(&self, blob: &NewBlob) -> Result<BlobRecord> {
        blob.validate()?;

        // Stored with microsecond precision; truncate first so the returned
        // record equals what a later fetch reads back.
        let created_at = Utc::now().trunc_subsecs(6);
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO encrypted_blobs (ciphertext_b64, filename, note, algorithm, kdf, owner, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                blob.ciphertext_b64,
                blob.filename,
                blob.note,
                blob.algorithm,
                blob.kdf,
                blob.owner,
                created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;
        let id = conn.last_insert_rowid();
        tracing::debug!(id, "stored blob record");

        Ok(BlobRecord {
            id,
            ciphertext_b64: blob.ciphertext_b64.clone(),
            filename: blob.filename.clone(),
            note: blob.note.clone(),
            algorithm: blob.algorithm.clone(),
            kdf: blob.kdf.clone(),
            owner: blob.owner.clone(),
            created_at,
        })
    }

    fn fetch(&self, id: BlobId) -> Result<Option<BlobRecord>> {
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM encrypted_blobs WHERE id = ?1", BLOB_COLUMNS),
                [id],
                BlobRow::from_row,
            )
            .optional()?;

        row.map(BlobRecord::try_from).transpose()
    }

    fn list(&self, limit: ListLimit) -> Result<Vec<BlobRecord>> {
        let conn = self.lock_conn()?;

        // IDs only ever grow, so descending ID is newest first even when two
        // records share a timestamp.
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM encrypted_blobs ORDER BY id DESC LIMIT ?1",
            BLOB_COLUMNS
        ))?;
        let rows = stmt.query_map([limit.get()], BlobRow::from_row)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?.try_into()?);
        }
        Ok(records)
    }

    fn delete(&self, id: BlobId) -> Result<bool> {
        let conn = self.lock_conn()?;
        let removed = conn.execute("DELETE FROM encrypted_blobs WHERE id = ?1", [id])?;
        tracing::debug!(id, removed, "delete blob record");
        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::KdfParams;

    fn store() -> SqliteBlobStore {
        SqliteBlobStore::open_in_memory().unwrap()
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = store();
        let params = KdfParams::default();

        let first = store.create(&NewBlob::new("a", &params)).unwrap();
        let second = store.create(&NewBlob::new("b", &params)).unwrap();

        assert!(second.id > first.id);
        assert!(second.created_at >= first.created_at);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let store = store();
        let params = KdfParams::default();

        let first = store.create(&NewBlob::new("a", &params)).unwrap();
        assert!(store.delete(first.id).unwrap());
        let second = store.create(&NewBlob::new("b", &params)).unwrap();

        assert!(second.id > first.id);
    }

    #[test]
    fn test_create_rejects_oversized_metadata() {
        let store = store();
        let blob = NewBlob::new("a", &KdfParams::default()).with_note("x".repeat(513));

        assert!(matches!(
            store.create(&blob),
            Err(SealboxError::InvalidInput(_))
        ));
        assert!(store.list(ListLimit::default()).unwrap().is_empty());
    }

    #[test]
    fn test_fetch_missing_returns_none() {
        assert!(store().fetch(42).unwrap().is_none());
    }

    #[test]
    fn test_ciphertext_stored_verbatim() {
        let store = store();
        let odd = "  not base64, kept as-is \n";
        let record = store
            .create(&NewBlob::new(odd, &KdfParams::default()))
            .unwrap();

        let fetched = store.fetch(record.id).unwrap().unwrap();
        assert_eq!(fetched.ciphertext_b64, odd);
    }

    #[test]
    fn test_list_respects_limit_and_order() {
        let store = store();
        let params = KdfParams::default();
        for i in 0..5 {
            store
                .create(&NewBlob::new(format!("blob-{}", i), &params))
                .unwrap();
        }

        let records = store.list(ListLimit::clamped(3)).unwrap();
        let payloads: Vec<&str> = records.iter().map(|r| r.ciphertext_b64.as_str()).collect();
        assert_eq!(payloads, vec!["blob-4", "blob-3", "blob-2"]);
    }
}
