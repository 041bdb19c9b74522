//! Determinism vector: a fixed list of operations whose raw results are
//! pinned, so builds on different targets can be compared by raw value or
//! by digest.

use crate::fixed64::FixedPoint64;

pub const DETERMINISM_VECTOR_V1_SCHEMA: &str = "fixq.q32.determinism_vector.v1";

pub const DETERMINISM_VECTOR_V1_LEN: usize = 10;

// raw_bits reference values (v1)
pub const DETERMINISM_VECTOR_V1_EXPECTED: [i64; DETERMINISM_VECTOR_V1_LEN] = [
    0x0000_0001_8000_0000,
    0x0000_0000_8000_0000,
    -0x0000_0000_8000_0000,
    0x0000_0000_8000_0000,
    -0x0000_0001_8000_0000,
    0x0000_0002_4000_0000,
    1,
    -1,
    i64::MAX,
    i64::MIN,
];

pub fn determinism_vector_v1() -> [i64; DETERMINISM_VECTOR_V1_LEN] {
    let one = FixedPoint64::ONE;
    let half = FixedPoint64::from_raw(0x0000_0000_8000_0000);
    let neg_one = FixedPoint64::from_integer(-1);
    let one_and_half = FixedPoint64::from_raw(0x0000_0001_8000_0000);
    let eps = FixedPoint64::EPSILON;
    let max = FixedPoint64::MAXIMUM;
    [
        (one + half).raw_bits(),
        (one - half).raw_bits(),
        (half - one).raw_bits(),
        (one * half).raw_bits(),
        (neg_one * one_and_half).raw_bits(),
        (one_and_half * one_and_half).raw_bits(),
        (eps * half).raw_bits(),
        ((-eps) * half).raw_bits(),
        (max * one).raw_bits(),
        (max + eps).raw_bits(),
    ]
}

/// blake3 over the little-endian raws, in order.
pub fn determinism_digest(raws: &[i64]) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for value in raws {
        hasher.update(&value.to_le_bytes());
    }
    hasher.finalize()
}
