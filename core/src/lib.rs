//! Q32.32 fixed-point arithmetic.
//!
//! `FixedPoint64` stores `value * 2^32` in an `i64`. Multiplication forms the
//! full 128-bit product from 32-bit half-limbs, rescales it and rounds to
//! nearest (ties away from zero).

pub mod fault;
pub mod fixed64;
pub mod vector;
mod wide;

pub use fault::{ArithmeticFaultKind, ArithmeticOp};
pub use fixed64::FixedPoint64;
pub use vector::{
    determinism_digest, determinism_vector_v1, DETERMINISM_VECTOR_V1_EXPECTED,
    DETERMINISM_VECTOR_V1_LEN, DETERMINISM_VECTOR_V1_SCHEMA,
};

#[cfg(test)]
mod tests;
