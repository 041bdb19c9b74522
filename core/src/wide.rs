//! 128-bit product of two Q32.32 raw values, built from 32-bit half-limbs.
//!
//! The magnitude lives in `high:low` as an unsigned 128-bit number; the sign
//! is carried separately in `is_negative` and never folded into the halves.

const HALF_BITS: u32 = 32;
const HALF_MASK: u64 = 0xFFFF_FFFF;
const ROLL: u64 = 1 << HALF_BITS;

/// Unsigned 128-bit magnitude plus an out-of-band sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct WideProduct {
    pub(crate) high: u64,
    pub(crate) low: u64,
    pub(crate) is_negative: bool,
}

impl WideProduct {
    /// Full product of two raw values. `i64::MIN` is taken as magnitude 2^63.
    pub(crate) fn of(a: i64, b: i64) -> Self {
        let mut is_negative = false;
        if a < 0 {
            is_negative = !is_negative;
        }
        if b < 0 {
            is_negative = !is_negative;
        }

        let (high, low) = multiply_magnitudes(a.unsigned_abs(), b.unsigned_abs());
        Self {
            high,
            low,
            is_negative,
        }
    }

    /// Magnitude does not fit in a signed 64-bit integer.
    #[inline]
    pub(crate) fn is_big(&self) -> bool {
        self.high != 0 || (self.low >> 63) != 0
    }

    /// Bits 32..96 of the magnitude, rounded half up on bit 31.
    ///
    /// The flag is set when the rounded magnitude needs more than 64 bits;
    /// the returned word is then the rounded magnitude mod 2^64.
    pub(crate) fn rescaled_q32(&self) -> (u64, bool) {
        let kept = ((self.high & HALF_MASK) << HALF_BITS) | (self.low >> HALF_BITS);
        let round_up = (self.low >> (HALF_BITS - 1)) & 1;
        let (rounded, carried) = kept.overflowing_add(round_up);
        let truncated = (self.high >> HALF_BITS) != 0;
        (rounded, truncated || carried)
    }

    /// Signed Q32 raw, reduced mod 2^64 like the additive operators.
    pub(crate) fn wrapping_q32(&self) -> i64 {
        let (magnitude, _) = self.rescaled_q32();
        let bits = if self.is_negative {
            magnitude.wrapping_neg()
        } else {
            magnitude
        };
        bits as i64
    }

    /// Signed Q32 raw, or `None` when the rounded result leaves the i64 range.
    pub(crate) fn checked_q32(&self) -> Option<i64> {
        if !self.is_big() {
            return Some(self.wrapping_q32());
        }
        let (magnitude, overflowed) = self.rescaled_q32();
        if overflowed {
            return None;
        }
        if self.is_negative {
            // 2^63 is still representable as i64::MIN
            if magnitude <= 1u64 << 63 {
                Some((magnitude as i64).wrapping_neg())
            } else {
                None
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }

    /// Like `checked_q32`, clamping to the bound on the product's side.
    pub(crate) fn saturating_q32(&self) -> i64 {
        match self.checked_q32() {
            Some(raw) => raw,
            None if self.is_negative => i64::MIN,
            None => i64::MAX,
        }
    }
}

/// Schoolbook multiply of two 64-bit magnitudes over 32-bit half-limbs.
/// Returns `(high, low)` of the exact 128-bit product.
pub(crate) fn multiply_magnitudes(a: u64, b: u64) -> (u64, u64) {
    let (ahi, alo) = split(a);
    let (bhi, blo) = split(b);

    let (d1, d0) = split(alo * blo);
    let (e1, e0) = split(alo * bhi);
    let (f1, f0) = split(ahi * blo);
    let (g1, g0) = split(ahi * bhi);

    let (sum, carry) = accumulate_middle(d1, e0, f0);

    let low = d0.wrapping_add(sum << HALF_BITS);
    let high = carry + e1 + f1 + g0 + (g1 << HALF_BITS);
    (high, low)
}

/// Middle column `d1 + e0 + f0`, drained into a 32-bit digit and a carry.
/// Each term is below 2^32, so the carry is at most 2.
fn accumulate_middle(d1: u64, e0: u64, f0: u64) -> (u64, u64) {
    let mut sum = d1 + e0 + f0;
    let mut carry = 0;
    while sum > HALF_MASK {
        sum -= ROLL;
        carry += 1;
    }
    (sum, carry)
}

#[inline]
fn split(value: u64) -> (u64, u64) {
    (value >> HALF_BITS, value & HALF_MASK)
}
