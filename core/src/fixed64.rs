use serde::{Deserialize, Serialize};

use crate::fault::{ArithmeticFaultKind, ArithmeticOp};
use crate::wide::WideProduct;

/// Q32.32 fixed-point value, raw_bits = value * 2^32.
///
/// `+`, `-` and `*` wrap on overflow the way native `i64` arithmetic does.
/// `try_*` report the overflow instead, `saturating_*` clamp to the bounds.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixedPoint64 {
    raw: i64,
}

impl FixedPoint64 {
    pub const FRAC_BITS: u32 = 32;
    pub const ONE_RAW: i64 = 1i64 << Self::FRAC_BITS;

    pub const ONE: FixedPoint64 = FixedPoint64 { raw: Self::ONE_RAW };
    pub const ZERO: FixedPoint64 = FixedPoint64 { raw: 0 };
    /// Smallest positive step.
    pub const EPSILON: FixedPoint64 = FixedPoint64 { raw: 1 };
    pub const MAXIMUM: FixedPoint64 = FixedPoint64 {
        raw: 0x7FFF_FFFF_FFFF_FFFF,
    };
    pub const MINIMUM: FixedPoint64 = FixedPoint64 {
        raw: -0x7FFF_FFFF_FFFF_FFFF - 1,
    };

    /// Wraps raw Q32.32 bits as-is.
    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Self { raw }
    }

    /// Underlying storage, for serialization and debugging.
    #[inline]
    pub const fn raw_bits(self) -> i64 {
        self.raw
    }

    /// i32 -> Q32.32, always exact.
    #[inline]
    pub const fn from_integer(value: i32) -> Self {
        Self {
            raw: (value as i64) << Self::FRAC_BITS,
        }
    }

    /// Integer part, rounded toward negative infinity (`-0.5` gives `-1`).
    #[inline]
    pub const fn to_int32(self) -> i32 {
        (self.raw >> Self::FRAC_BITS) as i32
    }

    /// `raw / 2^32`; exact for magnitudes below 2^53 raw.
    #[inline]
    pub fn to_double(self) -> f64 {
        self.raw as f64 / Self::ONE_RAW as f64
    }

    /// Raw addition mod 2^64; what `+` does.
    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_add(rhs.raw))
    }

    /// Raw subtraction mod 2^64; what `-` does.
    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.wrapping_sub(rhs.raw))
    }

    /// `-MINIMUM` is `MINIMUM`.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::from_raw(self.raw.wrapping_neg())
    }

    /// Rounded to nearest, ties away from zero, then reduced mod 2^64.
    #[inline]
    pub fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_raw(WideProduct::of(self.raw, rhs.raw).wrapping_q32())
    }

    /// `Err(Overflow)` instead of wrapping.
    pub fn try_add(self, rhs: Self) -> Result<Self, ArithmeticFaultKind> {
        self.raw
            .checked_add(rhs.raw)
            .map(Self::from_raw)
            .ok_or(ArithmeticFaultKind::Overflow {
                op: ArithmeticOp::Add,
            })
    }

    /// `Err(Overflow)` instead of wrapping.
    pub fn try_sub(self, rhs: Self) -> Result<Self, ArithmeticFaultKind> {
        self.raw
            .checked_sub(rhs.raw)
            .map(Self::from_raw)
            .ok_or(ArithmeticFaultKind::Overflow {
                op: ArithmeticOp::Sub,
            })
    }

    /// Same rounding as `*`; fails when the rounded result leaves the range.
    pub fn try_mul(self, rhs: Self) -> Result<Self, ArithmeticFaultKind> {
        let raw = WideProduct::of(self.raw, rhs.raw)
            .checked_q32()
            .ok_or(ArithmeticFaultKind::Overflow {
                op: ArithmeticOp::Mul,
            })?;
        Ok(Self::from_raw(raw))
    }

    /// Clamps to `MINIMUM..=MAXIMUM`.
    #[inline]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_add(rhs.raw))
    }

    /// Clamps to `MINIMUM..=MAXIMUM`.
    #[inline]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self::from_raw(self.raw.saturating_sub(rhs.raw))
    }

    /// Rounded like `*`, clamped to the bound on the product's side.
    #[inline]
    pub fn saturating_mul(self, rhs: Self) -> Self {
        Self::from_raw(WideProduct::of(self.raw, rhs.raw).saturating_q32())
    }
}

// ---- operators: wraparound is the default for + - * and unary - ----

impl core::ops::Add for FixedPoint64 {
    type Output = FixedPoint64;
    #[inline]
    fn add(self, rhs: FixedPoint64) -> FixedPoint64 {
        self.wrapping_add(rhs)
    }
}

impl core::ops::Sub for FixedPoint64 {
    type Output = FixedPoint64;
    #[inline]
    fn sub(self, rhs: FixedPoint64) -> FixedPoint64 {
        self.wrapping_sub(rhs)
    }
}

impl core::ops::Mul for FixedPoint64 {
    type Output = FixedPoint64;
    #[inline]
    fn mul(self, rhs: FixedPoint64) -> FixedPoint64 {
        self.wrapping_mul(rhs)
    }
}

impl core::ops::Neg for FixedPoint64 {
    type Output = FixedPoint64;
    #[inline]
    fn neg(self) -> FixedPoint64 {
        self.wrapping_neg()
    }
}

impl core::ops::AddAssign for FixedPoint64 {
    #[inline]
    fn add_assign(&mut self, rhs: FixedPoint64) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for FixedPoint64 {
    #[inline]
    fn sub_assign(&mut self, rhs: FixedPoint64) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign for FixedPoint64 {
    #[inline]
    fn mul_assign(&mut self, rhs: FixedPoint64) {
        *self = *self * rhs;
    }
}
