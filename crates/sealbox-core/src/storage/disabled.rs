//! Store used when persistence is switched off.
//!
//! Encryption and decryption keep working; every storage call reports the
//! database as unavailable.

use crate::error::{Result, SealboxError};
use crate::storage::traits::BlobStore;
use crate::storage::types::{BlobId, BlobRecord, ListLimit, NewBlob};

const DISABLED: &str = "Database disabled";

#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledBlobStore;

impl DisabledBlobStore {
    fn unavailable<T>() -> Result<T> {
        Err(SealboxError::StorageUnavailable(DISABLED.to_string()))
    }
}

impl BlobStore for DisabledBlobStore {
    fn create(&self, _blob: &NewBlob) -> Result<BlobRecord> {
        Self::unavailable()
    }

    fn fetch(&self, _id: BlobId) -> Result<Option<BlobRecord>> {
        Self::unavailable()
    }

    fn list(&self, _limit: ListLimit) -> Result<Vec<BlobRecord>> {
        Self::unavailable()
    }

    fn delete(&self, _id: BlobId) -> Result<bool> {
        Self::unavailable()
    }
}
