//! # Cipher Module
//!
//! The Hill cipher itself: a pure `encode -> transform -> decode` pipeline in
//! [`encrypt_message`] / [`decrypt_message`], and the [`HillCipher`] engine that
//! holds a key and a message between calls.

pub mod key;

pub use key::HillKey;

use crate::codec::{decode, encode, normalize_message};
use crate::errors::HillCryptoError;
use crate::ring::matrix_ops::matrix_mul;
use crate::ring::{ColumnVector, KeyMatrix, Ring};

use tracing::debug;

/// Multiplies every column vector by `key` without reducing the result.
pub fn transform(
    key: &KeyMatrix,
    vectors: &[ColumnVector],
) -> Result<Vec<ColumnVector>, HillCryptoError> {
    vectors.iter().map(|vector| matrix_mul(key, vector)).collect()
}

fn run(key: &KeyMatrix, message: &str) -> Result<String, HillCryptoError> {
    let vectors = encode(message)?;
    if vectors.is_empty() {
        return Err(HillCryptoError::EmptyMessage);
    }

    debug!(blocks = vectors.len(), "applying key matrix");
    decode(&transform(key, &vectors)?, &Ring::alphabet())
}

/// Encrypts `message` with `key`. Non-letters are dropped and an odd-length
/// message gets its last letter repeated.
///
/// # Example
///
/// ```
/// # use hill_crypto::cipher::{HillKey, encrypt_message};
/// let key = HillKey::try_with([[3, 3], [2, 5]]).unwrap();
/// assert_eq!(encrypt_message(&key, "ba").unwrap(), "ii");
/// ```
pub fn encrypt_message(key: &HillKey, message: &str) -> Result<String, HillCryptoError> {
    run(key.matrix(), message)
}

/// Decrypts `ciphertext` with the modular inverse of `key`.
///
/// # Errors
///
/// Returns `HillCryptoError::NoInverse` if the key determinant shares a factor with 26.
pub fn decrypt_message(key: &HillKey, ciphertext: &str) -> Result<String, HillCryptoError> {
    run(&key.inverse()?, ciphertext)
}

/// Stateful front end over [`encrypt_message`] and [`decrypt_message`].
///
/// ```
/// # use hill_crypto::cipher::HillCipher;
/// # use hill_crypto::errors::HillCryptoError;
/// # fn main() -> Result<(), HillCryptoError> {
/// let mut cipher = HillCipher::new();
/// let secret = cipher
///     .set_key([[3, 3], [2, 5]])?
///     .set_message("Hill")
///     .encrypt()?
///     .result()?
///     .to_string();
///
/// let plain = cipher.set_message(&secret).decrypt()?.result()?;
/// assert_eq!(plain, "hill");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct HillCipher {
    key: Option<HillKey>,
    message: Option<String>,
    result: Option<String>,
}

impl HillCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and stores the key. A rejected key clears any previous one, so
    /// later `encrypt`/`decrypt` calls fail with `KeyNotSet`.
    pub fn set_key(&mut self, matrix: KeyMatrix) -> Result<&mut Self, HillCryptoError> {
        match HillKey::try_with(matrix) {
            Ok(key) => {
                self.key = Some(key);
                Ok(self)
            }
            Err(err) => {
                self.key = None;
                Err(err)
            }
        }
    }

    /// Stores the normalized message.
    pub fn set_message(&mut self, text: &str) -> &mut Self {
        self.message = Some(normalize_message(text));
        self
    }

    pub fn encrypt(&mut self) -> Result<&mut Self, HillCryptoError> {
        let (key, message) = self.inputs()?;
        self.result = Some(encrypt_message(key, message)?);
        Ok(self)
    }

    /// Decrypts the stored message. The stored key is left untouched; its
    /// inverse is recomputed on every call.
    pub fn decrypt(&mut self) -> Result<&mut Self, HillCryptoError> {
        let (key, message) = self.inputs()?;
        self.result = Some(decrypt_message(key, message)?);
        Ok(self)
    }

    /// The output of the last successful `encrypt` or `decrypt`.
    pub fn result(&self) -> Result<&str, HillCryptoError> {
        self.result
            .as_deref()
            .ok_or(HillCryptoError::ResultNotAvailable)
    }

    pub fn key(&self) -> Option<&HillKey> {
        self.key.as_ref()
    }

    fn inputs(&self) -> Result<(&HillKey, &str), HillCryptoError> {
        let key = self.key.as_ref().ok_or(HillCryptoError::KeyNotSet)?;
        let message = self
            .message
            .as_deref()
            .ok_or(HillCryptoError::MessageNotSet)?;
        Ok((key, message))
    }
}
