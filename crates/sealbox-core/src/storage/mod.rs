//! Storage abstraction for Sealbox.
//!
//! This module defines the `BlobStore` trait and the record types it
//! persists.
//!
//! ## Backends
//!
//! - `SqliteBlobStore`: on-disk or in-memory SQLite
//! - `DisabledBlobStore`: persistence switched off
//!
//! Stores never look inside a ciphertext. Whether a blob decrypts is
//! decided by the crypto layer, before or after storage.

pub mod disabled;
pub mod sqlite;
pub mod traits;
pub mod types;

pub use disabled::DisabledBlobStore;
pub use sqlite::SqliteBlobStore;
pub use traits::BlobStore;
pub use types::{BlobId, BlobRecord, BlobSummary, ListLimit, NewBlob};
