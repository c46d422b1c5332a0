#[derive(thiserror::Error, Debug)]
pub enum HillCryptoError {
    /// The key determinant is zero or lies exactly one away from the alphabet modulus.
    #[error("InvalidKey: determinant {determinant} is not accepted")]
    InvalidKey { determinant: i64 },
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, k) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    /// Error when creating a ring with an invalid modulus (k <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),

    #[error("No valid key has been configured")]
    KeyNotSet,
    #[error("No message has been configured")]
    MessageNotSet,
    #[error("Message contains no alphabetic symbols")]
    EmptyMessage,
    #[error("No result available: run encrypt or decrypt first")]
    ResultNotAvailable,

    #[error("Symbol '{0}' is not part of the alphabet")]
    UnknownSymbol(char),
    #[error("Index {0} is outside of the alphabet")]
    SymbolIndexOutOfRange(i64),

    #[error("Could not generate a usable key within {0} attempts")]
    KeyGenerationExhausted(usize),
    #[error("Internal error: Overflow during calculation")]
    CalculationOverflow,

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
