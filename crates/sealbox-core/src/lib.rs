//! # Sealbox Core
//!
//! Core library for Sealbox - password-based authenticated encryption of
//! text, with an optional store for the resulting blobs.
//!
//! This crate provides the crypto, the blob wire format, the storage
//! abstraction and the typed request/response contract, independent of
//! any CLI or network surface.
//!
//! ## Architecture
//!
//! - **crypto**: PBKDF2 key derivation, AES-256-GCM, blob wire format
//! - **storage**: `BlobStore` trait, SQLite and disabled backends
//! - **api**: request/response types and the `Sealbox` service
//! - **error**: `SealboxError` and the `Result` alias

pub mod api;
pub mod crypto;
pub mod error;
pub mod storage;

pub use api::Sealbox;
pub use error::{Result, SealboxError};
pub use storage::BlobStore;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
