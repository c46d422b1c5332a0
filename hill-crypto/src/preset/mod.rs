//! Fixed tables shared by the whole crate.

pub mod alphabet;
