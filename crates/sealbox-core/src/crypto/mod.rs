//! Cryptographic operations for Sealbox.
//!
//! This module provides password-based authenticated encryption using
//! well-audited RustCrypto primitives:
//! - **PBKDF2-HMAC-SHA1**: password stretching (100,000 iterations by default)
//! - **AES-256-GCM**: authenticated encryption, 12-byte nonce, 16-byte tag
//!
//! ## Security Model
//!
//! - Fresh random salt and nonce for every encryption (OS RNG only)
//! - No key cache: a derived key lives for exactly one operation
//! - Derived keys and decrypted buffers are zeroized on drop
//! - Every decryption failure looks the same from the outside
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of stored blobs
//! - Tampering with any byte of a blob
//! - Error-message oracles distinguishing bad passwords from corrupted data
//!
//! We do NOT defend against:
//! - Weak passwords chosen by the caller
//! - Recovery of a forgotten password (that data is gone)

pub mod blob;
pub mod cipher;
pub mod key;
pub mod password;

pub use blob::{EncryptedBlob, IV_LEN, MIN_BLOB_LEN, SALT_LEN, TAG_LEN};
pub use cipher::{
    decrypt, decrypt_with, encrypt, encrypt_with, DecryptError, DecryptErrorKind,
    ALGORITHM_LABEL,
};
pub use key::{derive_key, derive_key_with, DerivedKey, KdfParams, DEFAULT_ITERATIONS};
pub use password::validate_password;
