//! AES-256-GCM encryption and decryption of text under a password.
//!
//! Each call derives its own key from a fresh salt, so two encryptions of
//! the same text never share a key or nonce.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use thiserror::Error;
use zeroize::Zeroizing;

use super::blob::{EncryptedBlob, IV_LEN, SALT_LEN, TAG_LEN};
use super::key::{derive_key_with, KdfParams};
use crate::error::{Result, SealboxError, DECRYPTION_FAILED_MESSAGE};

/// Descriptive algorithm label stored alongside persisted blobs.
pub const ALGORITHM_LABEL: &str = "AES-256-GCM";

/// Internal reason a decryption failed.
///
/// Only tests and debug logs look at this; callers outside the crate see
/// `SealboxError::DecryptionFailed` for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptErrorKind {
    /// Blob too short or not valid base64
    Malformed,
    /// Tag mismatch: wrong password or altered bytes
    Authentication,
    /// Authenticated plaintext is not UTF-8
    InvalidUtf8,
}

/// A decryption failure. Displays the same message for every kind.
#[derive(Debug, Error)]
#[error("{}", DECRYPTION_FAILED_MESSAGE)]
pub struct DecryptError {
    kind: DecryptErrorKind,
}

impl DecryptError {
    pub fn new(kind: DecryptErrorKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> DecryptErrorKind {
        self.kind
    }
}

fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    getrandom::getrandom(&mut buf).map_err(|e| {
        SealboxError::Crypto(format!("Secure random source unavailable: {}", e))
    })?;
    Ok(buf)
}

/// Encrypt text with the default work factor.
///
/// # Examples
///
/// ```
/// use sealbox_core::crypto::{decrypt, encrypt};
///
/// let blob = encrypt("meet at noon", "hunter2").unwrap();
/// assert_eq!(decrypt(&blob, "hunter2").unwrap(), "meet at noon");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> Result<EncryptedBlob> {
    encrypt_with(plaintext, password, &KdfParams::default())
}

/// Encrypt text with an explicit work factor.
///
/// # Errors
///
/// Returns `SealboxError::Crypto` if the OS random source fails or the
/// cipher cannot be initialised.
pub fn encrypt_with(plaintext: &str, password: &str, params: &KdfParams) -> Result<EncryptedBlob> {
    let salt = random_bytes::<SALT_LEN>()?;
    let nonce = random_bytes::<IV_LEN>()?;
    let key = derive_key_with(password, &salt, params);

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| SealboxError::Crypto(format!("Failed to create cipher: {}", e)))?;
    let mut sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|_| SealboxError::Crypto("AES-GCM encryption failed".to_string()))?;

    // aes-gcm appends the tag; the wire format carries it before the ciphertext.
    let tag_start = sealed.len() - TAG_LEN;
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&sealed[tag_start..]);
    sealed.truncate(tag_start);

    let blob = EncryptedBlob::from_parts(salt, nonce, tag, sealed);
    tracing::debug!(blob_len = blob.len(), "encrypted blob");
    Ok(blob)
}

/// Decrypt a blob with the default work factor.
pub fn decrypt(blob: &EncryptedBlob, password: &str) -> std::result::Result<String, DecryptError> {
    decrypt_with(blob, password, &KdfParams::default())
}

/// Decrypt and authenticate a blob with an explicit work factor.
///
/// Nothing is returned unless the tag verifies and the plaintext is UTF-8.
pub fn decrypt_with(
    blob: &EncryptedBlob,
    password: &str,
    params: &KdfParams,
) -> std::result::Result<String, DecryptError> {
    let key = derive_key_with(password, blob.salt(), params);
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| DecryptError::new(DecryptErrorKind::Authentication))?;

    let mut sealed = Vec::with_capacity(blob.ciphertext().len() + TAG_LEN);
    sealed.extend_from_slice(blob.ciphertext());
    sealed.extend_from_slice(blob.tag());

    let plaintext = cipher
        .decrypt(Nonce::from_slice(blob.nonce()), sealed.as_slice())
        .map(Zeroizing::new)
        .map_err(|_| {
            tracing::debug!(blob_len = blob.len(), "authentication tag mismatch");
            DecryptError::new(DecryptErrorKind::Authentication)
        })?;

    let text = std::str::from_utf8(&plaintext)
        .map_err(|_| DecryptError::new(DecryptErrorKind::InvalidUtf8))?;
    Ok(text.to_owned())
}
