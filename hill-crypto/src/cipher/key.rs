use crate::errors::HillCryptoError;
use crate::preset::alphabet::ALPHABET_SIZE;
use crate::ring::matrix_ops::{determinant_2x2, inverse_key_mod, is_valid_determinant};
use crate::ring::{KeyMatrix, Ring};

use rand::prelude::{Rng, SeedableRng, StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const MAX_GENERATION_ATTEMPTS: usize = 10_000;

/// A 2×2 key matrix that passed validation.
///
/// Deserialization goes through [`HillKey::try_with`], so a rejected matrix can
/// never be loaded from JSON either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "KeyMatrix", into = "KeyMatrix")]
pub struct HillKey {
    matrix: KeyMatrix,
    determinant: i64,
}

impl HillKey {
    /// Validates `matrix` and wraps it as a key.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::InvalidKey` if the determinant is zero or one away from 26.
    pub fn try_with(matrix: KeyMatrix) -> Result<Self, HillCryptoError> {
        let determinant = determinant_2x2(&matrix)?;

        if !is_valid_determinant(determinant, &Ring::alphabet()) {
            warn!(determinant, "rejecting key matrix");
            return Err(HillCryptoError::InvalidKey { determinant });
        }

        Ok(Self {
            matrix,
            determinant,
        })
    }

    /// Draws a key that is both accepted and invertible mod 26.
    ///
    /// The same seed always yields the same key.
    pub fn generate(seed: u64) -> Result<Self, HillCryptoError> {
        let ring = Ring::alphabet();
        let mut rng = StdRng::seed_from_u64(seed);

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let mut matrix = [[0i64; 2]; 2];
            for x in matrix.iter_mut().flatten() {
                *x = rng.random_range(0..ALPHABET_SIZE as i64);
            }

            let Ok(key) = Self::try_with(matrix) else {
                continue;
            };
            if ring.inv(key.determinant).is_ok() {
                debug!(attempt, "generated key matrix");
                return Ok(key);
            }
        }

        Err(HillCryptoError::KeyGenerationExhausted(
            MAX_GENERATION_ATTEMPTS,
        ))
    }

    /// The validated matrix.
    pub fn matrix(&self) -> &KeyMatrix {
        &self.matrix
    }

    /// The raw (unreduced) determinant.
    pub fn determinant(&self) -> i64 {
        self.determinant
    }

    /// Returns the inverse matrix mod 26, used for decryption.
    ///
    /// The inverse is returned as a bare matrix: it is not required to satisfy
    /// the validity rule itself.
    pub fn inverse(&self) -> Result<KeyMatrix, HillCryptoError> {
        inverse_key_mod(&self.matrix, &Ring::alphabet()).inspect_err(|err| {
            warn!(determinant = self.determinant, %err, "key has no inverse");
        })
    }

    /// Serializes the key as its bare matrix, e.g. `[[3,3],[2,5]]`.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::SerializationError` if `serde_json` fails.
    pub fn to_json(&self) -> Result<String, HillCryptoError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a matrix from JSON and validates it like [`HillKey::try_with`].
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::SerializationError` if the JSON is malformed,
    /// not a 2×2 integer matrix, or the matrix is rejected as a key.
    pub fn from_json(json: &str) -> Result<Self, HillCryptoError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl TryFrom<KeyMatrix> for HillKey {
    type Error = HillCryptoError;

    fn try_from(matrix: KeyMatrix) -> Result<Self, Self::Error> {
        Self::try_with(matrix)
    }
}

impl From<HillKey> for KeyMatrix {
    fn from(key: HillKey) -> Self {
        key.matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_invertible_key() -> Result<(), HillCryptoError> {
        let key = HillKey::try_with([[3, 3], [2, 5]])?;
        assert_eq!(key.determinant(), 9);
        assert_eq!(key.inverse()?, [[15, 17], [20, 9]]);
        Ok(())
    }

    #[test]
    fn test_rejects_fibonacci_key() {
        // det = -1 is invertible mod 26 but refused by the off-by-one rule.
        assert!(matches!(
            HillKey::try_with([[1, 1], [1, 0]]),
            Err(HillCryptoError::InvalidKey { determinant: -1 })
        ));
    }

    #[test]
    fn test_rejects_singular_key() {
        assert!(matches!(
            HillKey::try_with([[2, 4], [1, 2]]),
            Err(HillCryptoError::InvalidKey { determinant: 0 })
        ));
    }

    #[test]
    fn test_accepted_key_without_inverse() -> Result<(), HillCryptoError> {
        let key = HillKey::try_with([[2, 0], [0, 1]])?;
        assert!(matches!(key.inverse(), Err(HillCryptoError::NoInverse(_))));
        Ok(())
    }

    #[test]
    fn test_json_round_trip() -> Result<(), HillCryptoError> {
        let key = HillKey::try_with([[3, 3], [2, 5]])?;
        let json = key.to_json()?;
        assert_eq!(json, "[[3,3],[2,5]]");
        assert_eq!(HillKey::from_json(&json)?, key);
        Ok(())
    }

    #[test]
    fn test_json_rejects_invalid_key() {
        assert!(matches!(
            HillKey::from_json("[[1,1],[1,0]]"),
            Err(HillCryptoError::SerializationError(_))
        ));
        assert!(HillKey::from_json("[[1,2,3],[4,5,6]]").is_err());
    }

    #[test]
    fn test_generate_is_deterministic() -> Result<(), HillCryptoError> {
        let a = HillKey::generate(12345)?;
        let b = HillKey::generate(12345)?;
        assert_eq!(a, b);
        assert!(a.inverse().is_ok());
        assert!(a.matrix().iter().flatten().all(|v| (0..26).contains(v)));
        Ok(())
    }
}
