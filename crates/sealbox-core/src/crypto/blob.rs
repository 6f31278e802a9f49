//! Encrypted blob wire format.
//!
//! Fixed-offset concatenation, no version byte and no length fields:
//!
//! | Offset | Size | Field              |
//! |--------|------|--------------------|
//! | 0      | 16   | salt               |
//! | 16     | 12   | nonce (IV)         |
//! | 28     | 16   | AES-GCM auth tag   |
//! | 44     | N    | ciphertext         |
//!
//! At the boundary the blob travels as standard padded base64.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::cipher::{DecryptError, DecryptErrorKind};

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;
/// AES-GCM nonce length in bytes.
pub const IV_LEN: usize = 12;
/// AES-GCM tag length in bytes.
pub const TAG_LEN: usize = 16;
/// Smallest valid blob: header only, empty plaintext.
pub const MIN_BLOB_LEN: usize = SALT_LEN + IV_LEN + TAG_LEN;

const IV_OFFSET: usize = SALT_LEN;
const TAG_OFFSET: usize = SALT_LEN + IV_LEN;

/// A parsed encrypted blob.
///
/// Fields are private and there are no setters; a blob never changes
/// after it is produced or parsed.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    salt: [u8; SALT_LEN],
    nonce: [u8; IV_LEN],
    tag: [u8; TAG_LEN],
    ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    pub(crate) fn from_parts(
        salt: [u8; SALT_LEN],
        nonce: [u8; IV_LEN],
        tag: [u8; TAG_LEN],
        ciphertext: Vec<u8>,
    ) -> Self {
        Self {
            salt,
            nonce,
            tag,
            ciphertext,
        }
    }

    /// Split raw bytes into blob fields.
    ///
    /// # Errors
    ///
    /// Returns a `Malformed` error if the input is shorter than 44 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecryptError> {
        if bytes.len() < MIN_BLOB_LEN {
            return Err(DecryptError::new(DecryptErrorKind::Malformed));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..IV_OFFSET]);
        let mut nonce = [0u8; IV_LEN];
        nonce.copy_from_slice(&bytes[IV_OFFSET..TAG_OFFSET]);
        let mut tag = [0u8; TAG_LEN];
        tag.copy_from_slice(&bytes[TAG_OFFSET..MIN_BLOB_LEN]);

        Ok(Self::from_parts(
            salt,
            nonce,
            tag,
            bytes[MIN_BLOB_LEN..].to_vec(),
        ))
    }

    /// Decode a base64 string and split it into blob fields.
    ///
    /// # Errors
    ///
    /// Returns a `Malformed` error if the text is not valid base64 or the
    /// decoded bytes are too short. ASCII whitespace anywhere in the text is
    /// ignored, so line-wrapped blobs decode.
    pub fn from_base64(text: &str) -> Result<Self, DecryptError> {
        let compact: String = text
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD
            .decode(compact)
            .map_err(|_| DecryptError::new(DecryptErrorKind::Malformed))?;
        Self::from_bytes(&bytes)
    }

    /// Serialize as `salt || nonce || tag || ciphertext`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    pub fn nonce(&self) -> &[u8; IV_LEN] {
        &self.nonce
    }

    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Total encoded length in bytes.
    pub fn len(&self) -> usize {
        MIN_BLOB_LEN + self.ciphertext.len()
    }

    /// True when the blob carries no ciphertext (empty plaintext).
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }
}

impl fmt::Debug for EncryptedBlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptedBlob")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bytes(ciphertext_len: usize) -> Vec<u8> {
        (0..MIN_BLOB_LEN + ciphertext_len)
            .map(|i| i as u8)
            .collect()
    }

    #[test]
    fn test_fields_split_at_fixed_offsets() {
        let bytes = sample_bytes(5);
        let blob = EncryptedBlob::from_bytes(&bytes).unwrap();

        assert_eq!(blob.salt()[..], bytes[0..16]);
        assert_eq!(blob.nonce()[..], bytes[16..28]);
        assert_eq!(blob.tag()[..], bytes[28..44]);
        assert_eq!(blob.ciphertext(), &bytes[44..]);
        assert_eq!(blob.len(), bytes.len());
        assert_eq!(blob.to_bytes(), bytes);
    }

    #[test]
    fn test_header_only_blob_accepted() {
        let blob = EncryptedBlob::from_bytes(&sample_bytes(0)).unwrap();
        assert!(blob.is_empty());
        assert_eq!(blob.len(), MIN_BLOB_LEN);
    }

    #[test]
    fn test_short_input_is_malformed() {
        for len in [0, 1, 16, 28, 43] {
            let err = EncryptedBlob::from_bytes(&vec![0u8; len]).unwrap_err();
            assert_eq!(err.kind(), DecryptErrorKind::Malformed);
        }
    }

    #[test]
    fn test_invalid_base64_is_malformed() {
        let err = EncryptedBlob::from_base64("not base64 at all!!").unwrap_err();
        assert_eq!(err.kind(), DecryptErrorKind::Malformed);
    }

    #[test]
    fn test_short_base64_is_malformed() {
        let err = EncryptedBlob::from_base64("abc=").unwrap_err();
        assert_eq!(err.kind(), DecryptErrorKind::Malformed);
    }

    #[test]
    fn test_base64_surrounding_whitespace_ignored() {
        let bytes = sample_bytes(3);
        let text = format!("  {}\n", STANDARD.encode(&bytes));
        let blob = EncryptedBlob::from_base64(&text).unwrap();
        assert_eq!(blob.to_bytes(), bytes);
        assert_eq!(blob.to_base64(), STANDARD.encode(&bytes));
    }

    #[test]
    fn test_line_wrapped_base64_decodes() {
        let bytes = sample_bytes(30);
        let encoded = STANDARD.encode(&bytes);
        let (head, tail) = encoded.split_at(40);
        let wrapped = format!("{}\n{}\r\n", head, tail);

        let blob = EncryptedBlob::from_base64(&wrapped).unwrap();
        assert_eq!(blob.to_bytes(), bytes);

        let spaced = format!("{} \t{}", head, tail);
        assert_eq!(EncryptedBlob::from_base64(&spaced).unwrap().to_bytes(), bytes);
    }

    #[test]
    fn test_debug_hides_contents() {
        let blob = EncryptedBlob::from_bytes(&sample_bytes(4)).unwrap();
        let debug = format!("{:?}", blob);
        assert!(debug.contains("len"));
        assert!(!debug.contains("ciphertext"));
    }
}
