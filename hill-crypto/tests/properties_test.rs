use hill_crypto::codec::{normalize_message, pad_message};
use hill_crypto::ring::Ring;
use hill_crypto::ring::matrix_ops::is_valid_key;
use hill_crypto::{HillKey, decrypt_message, encrypt_message};

use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

#[quickcheck]
fn prop_round_trip(seed: u64, message: String) -> TestResult {
    let expected = pad_message(&normalize_message(&message));
    if expected.is_empty() {
        return TestResult::discard();
    }

    let Ok(key) = HillKey::generate(seed) else {
        return TestResult::error("key generation failed");
    };

    match encrypt_message(&key, &message).and_then(|c| decrypt_message(&key, &c)) {
        Ok(decoded) => TestResult::from_bool(decoded == expected),
        Err(err) => TestResult::error(err.to_string()),
    }
}

#[quickcheck]
fn prop_encryption_is_deterministic(seed: u64, message: String) -> TestResult {
    let Ok(key) = HillKey::generate(seed) else {
        return TestResult::error("key generation failed");
    };

    match (
        encrypt_message(&key, &message),
        encrypt_message(&key, &message),
    ) {
        (Ok(a), Ok(b)) => TestResult::from_bool(a == b),
        (Err(_), Err(_)) => TestResult::from_bool(normalize_message(&message).is_empty()),
        _ => TestResult::failed(),
    }
}

#[quickcheck]
fn prop_ciphertext_keeps_padded_length(message: String) -> TestResult {
    let Ok(key) = HillKey::try_with([[3, 3], [2, 5]]) else {
        return TestResult::error("reference key rejected");
    };

    let expected = pad_message(&normalize_message(&message));
    match encrypt_message(&key, &message) {
        Ok(cipher) => TestResult::from_bool(cipher.len() == expected.len()),
        Err(_) => TestResult::from_bool(expected.is_empty()),
    }
}

#[quickcheck]
fn prop_validity_ignores_gcd(a: i8, b: i8, c: i8, d: i8) -> bool {
    let key = [[a as i64, b as i64], [c as i64, d as i64]];
    let det = key[0][0] * key[1][1] - key[0][1] * key[1][0];
    let off_by_one = (det - 26).abs() == 1 || det == -1;

    is_valid_key(&key, &Ring::alphabet()) == (det != 0 && !off_by_one)
}
