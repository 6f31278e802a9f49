//! Blob store trait definition.
//!
//! The `BlobStore` trait defines the interface every persistence backend
//! implements. Records are write-once and delete-only.

use super::types::{BlobId, BlobRecord, ListLimit, NewBlob};
use crate::error::Result;

/// Persistence interface for encrypted blob records.
///
/// All implementations must ensure:
/// - The ciphertext is stored verbatim and never decoded
/// - IDs are unique and increase monotonically
/// - Each operation is atomic for the single record it touches
pub trait BlobStore: Send + Sync {
    /// Persist a new record.
    ///
    /// # Returns
    ///
    /// Returns the stored record, including its assigned ID and creation time.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::StorageUnavailable` if the backend cannot be
    /// reached.
    fn create(&self, blob: &NewBlob) -> Result<BlobRecord>;

    /// Get a record by ID.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(record))` if found, `Ok(None)` if not found.
    fn fetch(&self, id: BlobId) -> Result<Option<BlobRecord>>;

    /// List records, newest first, at most `limit` of them.
    fn list(&self, limit: ListLimit) -> Result<Vec<BlobRecord>>;

    /// Delete a record.
    ///
    /// # Returns
    ///
    /// Returns `true` if a record was removed, `false` if none existed.
    fn delete(&self, id: BlobId) -> Result<bool>;
}

// Lets callers pick a backend at runtime and still hand it over by value.
impl<S: BlobStore + ?Sized> BlobStore for Box<S> {
    fn create(&self, blob: &NewBlob) -> Result<BlobRecord> {
        (**self).create(blob)
    }

    fn fetch(&self, id: BlobId) -> Result<Option<BlobRecord>> {
        (**self).fetch(id)
    }

    fn list(&self, limit: ListLimit) -> Result<Vec<BlobRecord>> {
        (**self).list(limit)
    }

    fn delete(&self, id: BlobId) -> Result<bool> {
        (**self).delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn_store(_store: &dyn BlobStore) {}
        fn _accepts_boxed_store<S: BlobStore>(_store: S) {}
        fn _boxed_is_store(store: Box<dyn BlobStore>) {
            _accepts_boxed_store(store);
        }
    }
}
