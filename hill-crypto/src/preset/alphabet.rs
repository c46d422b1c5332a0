use crate::errors::HillCryptoError;

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Number of symbols in the alphabet; every computation happens modulo this value.
pub const ALPHABET_SIZE: usize = 26;

/// The symbol table. Position `i` encodes symbol `ALPHABET[i]`, so `z` is 0 and `y` is 25.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y',
];

lazy_static! {
    /// A static HashMap mapping a lowercase symbol to its position in [`ALPHABET`].
    pub static ref SYMBOL_TO_INDEX_MAP: HashMap<char, i64> = ALPHABET
        .iter()
        .enumerate()
        .map(|(index, &symbol)| (symbol, index as i64))
        .collect();
}

/// Returns the integer encoding of `symbol`.
///
/// # Example
///
/// ```
/// # use hill_crypto::preset::alphabet::index_of;
/// assert_eq!(index_of('z').unwrap(), 0);
/// assert_eq!(index_of('a').unwrap(), 1);
/// assert!(index_of('A').is_err());
/// ```
pub fn index_of(symbol: char) -> Result<i64, HillCryptoError> {
    SYMBOL_TO_INDEX_MAP
        .get(&symbol)
        .copied()
        .ok_or(HillCryptoError::UnknownSymbol(symbol))
}

/// Returns the symbol encoded by `index`, which must already be reduced into `[0, 26)`.
pub fn symbol_at(index: i64) -> Result<char, HillCryptoError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| ALPHABET.get(i).copied())
        .ok_or(HillCryptoError::SymbolIndexOutOfRange(index))
}
