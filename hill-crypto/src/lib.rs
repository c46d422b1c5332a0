//! # Hill Crypto
//!
//! The classical 2×2 Hill cipher over a fixed 26-letter alphabet.

pub mod cipher;
pub mod codec;
pub mod errors;
pub mod preset;
pub mod ring;

pub use cipher::{HillCipher, HillKey, decrypt_message, encrypt_message};
pub use errors::HillCryptoError;
