//! Key derivation using PBKDF2.
//!
//! This module stretches a password into a 256-bit AES key. The PRF is
//! HMAC-SHA1, which keeps blobs compatible with deployments that predate
//! this crate. The iteration count is not recorded inside a blob, so it
//! must stay constant for the lifetime of a deployment.

use pbkdf2::pbkdf2_hmac;
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use zeroize::ZeroizeOnDrop;

use super::blob::SALT_LEN;
use crate::error::{Result, SealboxError};

/// Default PBKDF2 iteration count.
pub const DEFAULT_ITERATIONS: u32 = 100_000;

/// Length of derived key in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// Work-factor settings for key derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KdfParams {
    iterations: u32,
}

impl KdfParams {
    /// Build parameters with a custom iteration count.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::InvalidInput` if `iterations` is zero.
    pub fn new(iterations: u32) -> Result<Self> {
        if iterations == 0 {
            return Err(SealboxError::InvalidInput(
                "KDF iterations must be positive".to_string(),
            ));
        }
        Ok(Self { iterations })
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Descriptive label stored alongside persisted blobs (e.g. `PBKDF2:100000`).
    pub fn label(&self) -> String {
        format!("PBKDF2:{}", self.iterations)
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// A cryptographic key derived from a password.
///
/// Key material is zeroized from memory when dropped.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for the current operation.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a key with the default work factor.
///
/// Same password + salt always produces the same key.
///
/// # Examples
///
/// ```
/// use sealbox_core::crypto::derive_key;
///
/// let salt = [7u8; 16];
/// let key = derive_key("my-password", &salt);
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(password: &str, salt: &[u8; SALT_LEN]) -> DerivedKey {
    derive_key_with(password, salt, &KdfParams::default())
}

/// Derive a key with an explicit work factor.
pub fn derive_key_with(password: &str, salt: &[u8; SALT_LEN], params: &KdfParams) -> DerivedKey {
    let mut key = DerivedKey {
        key: [0u8; KEY_LENGTH],
    };
    pbkdf2_into(password.as_bytes(), salt, params.iterations, &mut key.key);
    key
}

fn pbkdf2_into(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    pbkdf2_hmac::<Sha1>(password, salt, iterations, out);
}
