use crate::errors::HillCryptoError;
use crate::ring::{KeyMatrix, Matrix, Ring};

/// Computes `ad − bc` for `[[a, b], [c, d]]`.
///
/// # Errors
///
/// Returns `HillCryptoError::CalculationOverflow` if the products do not fit in an `i64`.
pub fn determinant_2x2(m: &KeyMatrix) -> Result<i64, HillCryptoError> {
    let ad = m[0][0].checked_mul(m[1][1]);
    let bc = m[0][1].checked_mul(m[1][0]);

    match (ad, bc) {
        (Some(ad), Some(bc)) => ad.checked_sub(bc).ok_or(HillCryptoError::CalculationOverflow),
        _ => Err(HillCryptoError::CalculationOverflow),
    }
}

/// Checks whether a key determinant is accepted.
///
/// A determinant is rejected when it is zero, or when the raw value lies exactly
/// one away from the modulus (25 and 27). Determinants smaller than the modulus
/// in magnitude are also checked by residue, which additionally rejects -1.
/// All three are invertible; 51 or -27 are accepted. Whether an inverse exists
/// at all is only checked on decryption.
pub fn is_valid_determinant(det: i64, ring: &Ring) -> bool {
    if det == 0 {
        return false;
    }

    let m = ring.modulus() as i64;
    let off_by_one = |value: i64| value.checked_sub(m).map(i64::unsigned_abs) == Some(1);

    let off_by_one_residue = det.unsigned_abs() < m as u64 && off_by_one(ring.normalize(det));

    !(off_by_one(det) || off_by_one_residue)
}

/// Returns `true` if `m` may be used as a key.
///
/// ```
/// # use hill_crypto::ring::{Ring, matrix_ops::is_valid_key};
/// let ring = Ring::alphabet();
/// assert!(is_valid_key(&[[3, 3], [2, 5]], &ring));
/// assert!(!is_valid_key(&[[1, 2], [2, 4]], &ring));
/// assert!(!is_valid_key(&[[1, 1], [1, 0]], &ring));
/// ```
pub fn is_valid_key(m: &KeyMatrix, ring: &Ring) -> bool {
    determinant_2x2(m).is_ok_and(|det| is_valid_determinant(det, ring))
}

/// Returns the adjugate `[[d, −b], [−c, a]]` of `[[a, b], [c, d]]`.
pub fn cofactor_matrix_2x2(m: &KeyMatrix) -> Result<KeyMatrix, HillCryptoError> {
    let neg = |v: i64| v.checked_neg().ok_or(HillCryptoError::CalculationOverflow);

    Ok([[m[1][1], neg(m[0][1])?], [neg(m[1][0])?, m[0][0]]])
}

/// Computes the plain integer product `C = AB` of a P×Q and a Q×R matrix.
///
/// No modular reduction is applied; callers reduce the entries when decoding.
///
/// # Errors
///
/// Returns `HillCryptoError::CalculationOverflow` if an entry does not fit in an `i64`.
#[allow(clippy::needless_range_loop)]
pub fn matrix_mul<const P: usize, const Q: usize, const R: usize>(
    a: &Matrix<P, Q>,
    b: &Matrix<Q, R>,
) -> Result<Matrix<P, R>, HillCryptoError> {
    let mut c = [[0i64; R]; P];

    for i in 0..P {
        for j in 0..R {
            let mut sum = 0i64;
            for k in 0..Q {
                sum = a[i][k]
                    .checked_mul(b[k][j])
                    .and_then(|term| sum.checked_add(term))
                    .ok_or(HillCryptoError::CalculationOverflow)?;
            }
            c[i][j] = sum;
        }
    }

    Ok(c)
}

/// Computes the inverse of a 2×2 key modulo the ring's modulus.
///
/// The adjugate is scaled by the inverse of the determinant and every entry is
/// reduced into the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::NoInverse` if `gcd(det, modulus) != 1`.
pub fn inverse_key_mod(m: &KeyMatrix, ring: &Ring) -> Result<KeyMatrix, HillCryptoError> {
    let cofactor = cofactor_matrix_2x2(m)?;
    let det_inv = ring.inv(determinant_2x2(m)?)?;

    Ok(cofactor.map(|row| row.map(|value| ring.mul(value, det_inv))))
}
