//! Conversion between text and the column vectors the key operates on.

use crate::errors::HillCryptoError;
use crate::preset::alphabet::{index_of, symbol_at};
use crate::ring::{ColumnVector, Ring};

use itertools::Itertools;

/// Strips everything but ASCII letters and folds the rest to lowercase.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::normalize_message;
/// assert_eq!(normalize_message("Hello, World 42!"), "helloworld");
/// assert_eq!(normalize_message("Ünïcode"), "ncode");
/// ```
pub fn normalize_message(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Duplicates the last symbol when the message has an odd length.
///
/// # Example
///
/// ```
/// # use hill_crypto::codec::pad_message;
/// assert_eq!(pad_message("abc"), "abcc");
/// assert_eq!(pad_message("ab"), "ab");
/// assert_eq!(pad_message(""), "");
/// ```
pub fn pad_message(message: &str) -> String {
    let mut padded = message.to_string();
    if padded.chars().count() % 2 != 0 {
        if let Some(last) = padded.chars().last() {
            padded.push(last);
        }
    }
    padded
}

/// Normalizes and pads `message`, then groups its symbol indices pairwise into
/// 2×1 column vectors in reading order.
///
/// # Errors
///
/// Returns `HillCryptoError::UnknownSymbol` if a symbol survives normalization
/// without being part of the alphabet.
pub fn encode(message: &str) -> Result<Vec<ColumnVector>, HillCryptoError> {
    let padded = pad_message(&normalize_message(message));

    let indices = padded
        .chars()
        .map(index_of)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(indices
        .into_iter()
        .tuples::<(i64, i64)>()
        .map(|(top, bottom)| [[top], [bottom]])
        .collect())
}

/// Flattens `vectors` top-to-bottom, reduces every entry into the ring and
/// maps it back through the alphabet.
pub fn decode(vectors: &[ColumnVector], ring: &Ring) -> Result<String, HillCryptoError> {
    vectors
        .iter()
        .flatten()
        .flatten()
        .map(|&value| symbol_at(ring.normalize(value)))
        .collect()
}
