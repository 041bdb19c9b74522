//! Exact reference arithmetic for Q32.32 raw values.
//!
//! Everything here is computed with arbitrary-precision integers and
//! rationals, so it can serve as an oracle for the fixed-width code paths.

use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::{One, Signed};
use serde::{Deserialize, Serialize};

pub const Q32_FRAC_BITS: u32 = 32;

/// Exact product of two Q32.32 raws and the roundings derived from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReferenceProduct {
    /// `a_raw * b_raw`, a Q64 raw.
    pub exact: BigInt,
    /// `exact / 2^32`, the product as an (unrounded) Q32 raw.
    pub value: BigRational,
    /// `value` rounded to nearest, ties away from zero.
    pub rounded: BigInt,
    /// `rounded` reduced mod 2^64 into two's complement.
    pub wrapped_raw: i64,
    /// `rounded` lies within `i64::MIN..=i64::MAX`.
    pub fits: bool,
}

impl ReferenceProduct {
    pub fn compute(a_raw: i64, b_raw: i64) -> Self {
        let exact = BigInt::from(a_raw) * BigInt::from(b_raw);
        let scale = BigInt::one() << Q32_FRAC_BITS;
        let value = BigRational::new(exact.clone(), scale);
        let rounded = round_half_away_from_zero(&value);
        let fits = rounded >= BigInt::from(i64::MIN) && rounded <= BigInt::from(i64::MAX);
        let wrapped_raw = wrap_to_i64(&rounded);
        Self {
            exact,
            value,
            rounded,
            wrapped_raw,
            fits,
        }
    }

    /// Flat summary of the product for golden files. `rounded` is kept as a
    /// decimal string since it may not fit in 64 bits.
    pub fn record(&self, a_raw: i64, b_raw: i64) -> ReferenceRecord {
        ReferenceRecord {
            a_raw,
            b_raw,
            wrapped_raw: self.wrapped_raw,
            saturated_raw: self.saturated_raw(),
            fits: self.fits,
            rounded: self.rounded.to_string(),
        }
    }

    /// `rounded` clamped to the i64 range.
    pub fn saturated_raw(&self) -> i64 {
        if self.fits {
            self.wrapped_raw
        } else if self.rounded.is_negative() {
            i64::MIN
        } else {
            i64::MAX
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub a_raw: i64,
    pub b_raw: i64,
    pub wrapped_raw: i64,
    pub saturated_raw: i64,
    pub fits: bool,
    pub rounded: String,
}

pub fn round_half_away_from_zero(value: &BigRational) -> BigInt {
    let half = BigRational::new(BigInt::one(), BigInt::from(2));
    let magnitude = (value.abs() + half).floor().to_integer();
    if value.is_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Low 64 bits of the two's-complement form of `value`.
pub fn wrap_to_i64(value: &BigInt) -> i64 {
    let (sign, digits) = value.to_u64_digits();
    let low = digits.first().copied().unwrap_or(0);
    let bits = if sign == Sign::Minus {
        low.wrapping_neg()
    } else {
        low
    };
    bits as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numer: i64, denom: i64) -> BigRational {
        BigRational::new(BigInt::from(numer), BigInt::from(denom))
    }

    #[test]
    fn rounding_ties_go_away_from_zero() {
        assert_eq!(round_half_away_from_zero(&ratio(1, 2)), BigInt::from(1));
        assert_eq!(round_half_away_from_zero(&ratio(-1, 2)), BigInt::from(-1));
        assert_eq!(round_half_away_from_zero(&ratio(5, 2)), BigInt::from(3));
        assert_eq!(round_half_away_from_zero(&ratio(-5, 2)), BigInt::from(-3));
        assert_eq!(round_half_away_from_zero(&ratio(7, 3)), BigInt::from(2));
        assert_eq!(round_half_away_from_zero(&ratio(-7, 3)), BigInt::from(-2));
        assert_eq!(round_half_away_from_zero(&ratio(0, 1)), BigInt::from(0));
    }

    #[test]
    fn wrap_matches_native_truncation() {
        let values = [
            0i128,
            1,
            -1,
            i64::MAX as i128,
            i64::MIN as i128,
            1 << 64,
            -(1 << 64) - 3,
            (1 << 63) + 5,
        ];
        for v in values {
            assert_eq!(wrap_to_i64(&BigInt::from(v)), v as i64, "v={v}");
        }
    }

    #[test]
    fn product_of_integers() {
        let one = 1i64 << 32;
        let p = ReferenceProduct::compute(2 * one, -3 * one);
        assert_eq!(p.exact, BigInt::from(-6i128 << 64));
        assert_eq!(p.rounded, BigInt::from(-6i64 << 32));
        assert_eq!(p.wrapped_raw, -6i64 << 32);
        assert!(p.fits);
    }

    #[test]
    fn half_epsilon_rounds_up_in_magnitude() {
        let p = ReferenceProduct::compute(1, 1 << 31);
        assert_eq!(p.value, ratio(1, 2));
        assert_eq!(p.wrapped_raw, 1);

        let n = ReferenceProduct::compute(-1, 1 << 31);
        assert_eq!(n.wrapped_raw, -1);
    }

    #[test]
    fn out_of_range_products_wrap_and_saturate() {
        let p = ReferenceProduct::compute(i64::MIN, -(1 << 32));
        assert!(!p.fits);
        assert_eq!(p.rounded, BigInt::from(1i128 << 63));
        assert_eq!(p.wrapped_raw, i64::MIN);
        assert_eq!(p.saturated_raw(), i64::MAX);

        let q = ReferenceProduct::compute(i64::MAX, i64::MIN);
        assert!(!q.fits);
        assert_eq!(q.saturated_raw(), i64::MIN);
    }

    #[test]
    fn record_survives_json() {
        let p = ReferenceProduct::compute(i64::MIN, -(1 << 32));
        let record = p.record(i64::MIN, -(1 << 32));
        assert_eq!(record.rounded, "9223372036854775808");
        assert_eq!(record.wrapped_raw, i64::MIN);
        assert_eq!(record.saturated_raw, i64::MAX);
        assert!(!record.fits);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"rounded\":\"9223372036854775808\""));
        let back: ReferenceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
