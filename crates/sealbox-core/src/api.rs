//! Typed boundary contract and the service that fulfils it.
//!
//! Request structs reject unknown fields, so a malformed request fails at
//! deserialisation instead of reaching the crypto layer. `Sealbox` owns the
//! store handle it is given; there is no process-wide store.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::crypto::{self, validate_password, EncryptedBlob, KdfParams};
use crate::error::{Result, SealboxError};
use crate::storage::{BlobId, BlobRecord, BlobStore, BlobSummary, ListLimit, NewBlob};

#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptRequest {
    pub plaintext: String,
    pub password: String,
}

impl EncryptRequest {
    pub fn new(plaintext: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            plaintext: plaintext.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for EncryptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptRequest")
            .field("plaintext", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncryptResponse {
    pub ciphertext_b64: String,
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecryptRequest {
    pub ciphertext_b64: String,
    pub password: String,
}

impl DecryptRequest {
    pub fn new(ciphertext_b64: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ciphertext_b64: ciphertext_b64.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for DecryptRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptRequest")
            .field("ciphertext_b64", &self.ciphertext_b64)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DecryptResponse {
    pub plaintext: String,
}

impl fmt::Debug for DecryptResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecryptResponse")
            .field("plaintext", &"[REDACTED]")
            .finish()
    }
}

/// Request to persist an existing blob with optional metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveRequest {
    pub ciphertext_b64: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
}

impl SaveRequest {
    fn to_new_blob(&self, kdf: &KdfParams) -> NewBlob {
        let mut blob = NewBlob::new(self.ciphertext_b64.clone(), kdf);
        blob.filename = self.filename.clone();
        blob.note = self.note.clone();
        blob.owner = self.owner.clone();
        blob
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub id: BlobId,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub msg: String,
}

/// Encryption service bound to one store and one deployment-wide KDF setting.
pub struct Sealbox<S: BlobStore> {
    store: S,
    kdf: KdfParams,
}

impl<S: BlobStore> Sealbox<S> {
    pub fn new(store: S, kdf: KdfParams) -> Self {
        Self { store, kdf }
    }

    pub fn ping(&self) -> PingResponse {
        PingResponse {
            ok: true,
            msg: "pong".to_string(),
        }
    }

    /// Encrypt plaintext under a password.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::InvalidInput` for an empty password, or
    /// `SealboxError::Crypto` if the random source fails.
    pub fn encrypt(&self, request: &EncryptRequest) -> Result<EncryptResponse> {
        validate_password(&request.password)?;
        let blob = crypto::encrypt_with(&request.plaintext, &request.password, &self.kdf)?;
        Ok(EncryptResponse {
            ciphertext_b64: blob.to_base64(),
        })
    }

    /// Decrypt a base64 blob.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::DecryptionFailed` for every failure cause.
    pub fn decrypt(&self, request: &DecryptRequest) -> Result<DecryptResponse> {
        let plaintext = EncryptedBlob::from_base64(&request.ciphertext_b64)
            .and_then(|blob| crypto::decrypt_with(&blob, &request.password, &self.kdf))
            .map_err(|err| {
                tracing::debug!(kind = ?err.kind(), "decryption failed");
                SealboxError::from(err)
            })?;
        Ok(DecryptResponse { plaintext })
    }

    /// Persist a blob and its metadata.
    pub fn save(&self, request: &SaveRequest) -> Result<SaveResponse> {
        let blob = request.to_new_blob(&self.kdf);
        blob.validate()?;
        let record = self.store.create(&blob)?;
        Ok(SaveResponse {
            id: record.id,
            created_at: record.created_at,
        })
    }

    /// Fetch a stored record.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::BlobNotFound` if no record has this ID.
    pub fn get(&self, id: BlobId) -> Result<BlobRecord> {
        self.store
            .fetch(id)?
            .ok_or(SealboxError::BlobNotFound(id))
    }

    /// List summaries, newest first. `limit` is clamped to `[1, 200]`, default 50.
    pub fn list(&self, limit: Option<i64>) -> Result<Vec<BlobSummary>> {
        let records = self.store.list(ListLimit::from(limit))?;
        Ok(records.iter().map(BlobSummary::from).collect())
    }

    /// Delete a stored record.
    ///
    /// # Errors
    ///
    /// Returns `SealboxError::BlobNotFound` if no record has this ID.
    pub fn delete(&self, id: BlobId) -> Result<DeleteResponse> {
        if self.store.delete(id)? {
            Ok(DeleteResponse { deleted: true })
        } else {
            Err(SealboxError::BlobNotFound(id))
        }
    }

    /// Fetch a stored record and decrypt it.
    pub fn open_blob(&self, id: BlobId, password: &str) -> Result<DecryptResponse> {
        let record = self.get(id)?;
        self.decrypt(&DecryptRequest::new(record.ciphertext_b64, password))
    }
}
