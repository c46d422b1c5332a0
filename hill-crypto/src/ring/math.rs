//! Implementation of ring ops using modular arithmetic.

use crate::errors::HillCryptoError;
use crate::preset::alphabet::ALPHABET_SIZE;

use super::{extended_gcd, gcd};

/// Represents a finite ring Z_k using modular arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ring {
    pub modulus: u64,
}

impl Default for Ring {
    fn default() -> Self {
        Self::alphabet()
    }
}

impl Ring {
    /// Create a new Ring with the given modulus.
    ///
    /// The modulus must be greater than 1.
    pub fn try_with(modulus: u64) -> Result<Self, HillCryptoError> {
        if modulus <= 1 {
            return Err(HillCryptoError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                modulus
            )));
        }

        Ok(Ring { modulus })
    }

    /// The ring Z_26 spanned by the cipher alphabet.
    pub const fn alphabet() -> Self {
        Ring {
            modulus: ALPHABET_SIZE as u64,
        }
    }

    /// Returns the modulus of the ring.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// assert_eq!(Ring::alphabet().modulus(), 26);
    /// ```
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Normalizes a value to be within the range `[0, modulus - 1]`.
    ///
    /// Non-negative values are reduced with `%`. Negative values take the
    /// sign-preserving remainder and add the modulus back onto it; a negative
    /// multiple of the modulus lands on 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.normalize(-1), 25);
    /// assert_eq!(ring.normalize(26), 0);
    /// assert_eq!(ring.normalize(52), 0);
    /// assert_eq!(ring.normalize(-52), 0);
    /// assert_eq!(ring.normalize(7), 7);
    /// ```
    pub fn normalize(&self, value: i64) -> i64 {
        let m = self.modulus as i64;

        if value >= 0 {
            if value < m {
                return value;
            }
            return value % m;
        }

        let rem = value % m;
        if rem == 0 {
            return 0;
        }

        m + rem
    }

    /// Computes `(a * b) mod modulus`.
    ///
    /// Uses `i128` internally to prevent overflow during multiplication before the modulo operation.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.mul(9, 3), 1);
    /// assert_eq!(ring.mul(-3, 5), 11);
    /// ```
    pub fn mul(&self, a: i64, b: i64) -> i64 {
        let a_norm = self.normalize(a);
        let b_norm = self.normalize(b);

        let result = (a_norm as i128 * b_norm as i128) % (self.modulus as i128);

        self.normalize(result as i64)
    }

    /// Computes the modular multiplicative inverse `a^-1 mod modulus`.
    ///
    /// The inverse exists if and only if `gcd(a, modulus) == 1`.
    /// Uses the Extended Euclidean Algorithm.
    ///
    /// # Errors
    ///
    /// Returns `HillCryptoError::NoInverse` if the inverse does not exist (i.e., `gcd(a, modulus) != 1`).
    /// Returns `HillCryptoError::NoInverse` if `a` is 0.
    ///
    /// # Example
    ///
    /// ```
    /// # use hill_crypto::ring::Ring;
    /// let ring = Ring::alphabet();
    /// assert_eq!(ring.inv(9).unwrap(), 3); // 9 * 3 = 27 = 1 mod 26
    /// assert_eq!(ring.inv(-1).unwrap(), 25);
    /// assert!(ring.inv(13).is_err()); // gcd(13, 26) = 13
    /// assert!(ring.inv(26).is_err());
    /// ```
    pub fn inv(&self, a: i64) -> Result<i64, HillCryptoError> {
        let a_norm = self.normalize(a);
        if a_norm == 0 {
            return Err(HillCryptoError::NoInverse(format!(
                "Cannot invert {} in mod {}",
                a, self.modulus
            )));
        }

        let m = self.modulus as i64;
        let g = gcd(a_norm, m);
        if g != 1 {
            return Err(HillCryptoError::NoInverse(format!(
                "Modular inverse does not exist for {} mod {} (gcd={})",
                a, self.modulus, g
            )));
        }

        let (_, x, _) = extended_gcd(a_norm, m);
        Ok(self.normalize(x))
    }
}
