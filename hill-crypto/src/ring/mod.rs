//! # Ring Module
//!
//! Provides the [`Ring`] struct for the residue ring Z_26 the cipher works in,
//! and the statically-shaped matrix types the key and message blocks use.

pub mod helper;
pub mod math;
pub mod matrix_ops;

/// A dense `R×C` integer matrix with its shape fixed at compile time.
pub type Matrix<const R: usize, const C: usize> = [[i64; C]; R];
/// The 2×2 key matrix.
pub type KeyMatrix = Matrix<2, 2>;
/// A 2×1 column of two consecutive symbol indices.
pub type ColumnVector = Matrix<2, 1>;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;
