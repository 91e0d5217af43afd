use crate::{traits::NumToPrimitive, types::Decimal};
use derive_more::Display;
use num_bigint::{BigInt as WrappedInt, Sign};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Int
///
/// Arbitrary-precision signed integer.
///

#[derive(
    Clone, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct Int(WrappedInt);

impl Int {
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Low 64 bits in two's complement, the way fixed-width narrowing behaves.
    #[must_use]
    pub fn to_i64_wrapping(&self) -> i64 {
        let (sign, digits) = self.0.to_u64_digits();
        #[allow(clippy::cast_possible_wrap)]
        let low = digits.first().copied().unwrap_or_default() as i64;

        match sign {
            Sign::Minus => low.wrapping_neg(),
            Sign::NoSign | Sign::Plus => low,
        }
    }

    /// Nearest f64; saturates to infinity beyond the f64 range.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_else(|| match self.0.sign() {
            Sign::Minus => f64::NEG_INFINITY,
            Sign::NoSign | Sign::Plus => f64::INFINITY,
        })
    }

    /// Nearest f32; saturates to infinity beyond the f32 range.
    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.0.to_f32().unwrap_or_else(|| match self.0.sign() {
            Sign::Minus => f32::NEG_INFINITY,
            Sign::NoSign | Sign::Plus => f32::INFINITY,
        })
    }

    /// Exact decimal conversion; `None` beyond the decimal range.
    #[must_use]
    pub fn to_decimal(&self) -> Option<Decimal> {
        i128::try_from(&self.0)
            .ok()
            .and_then(|n| rust_decimal::Decimal::try_from_i128_with_scale(n, 0).ok())
            .map(Decimal::from)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.sign() == Sign::NoSign
    }
}

impl std::ops::Add for Int {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self(self.0 + other.0)
    }
}

impl From<WrappedInt> for Int {
    fn from(i: WrappedInt) -> Self {
        Self(i)
    }
}

macro_rules! impl_int_from_primitive {
    ( $( $type:ty ),* ) => {
        $(
            impl From<$type> for Int {
                fn from(n: $type) -> Self {
                    Self(WrappedInt::from(n))
                }
            }
        )*
    };
}

impl_int_from_primitive!(i8, i16, i32, i64, i128, u64);

impl FromStr for Int {
    type Err = num_bigint::ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrappedInt::from_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_i64_wrapping_keeps_low_bits() {
        let big = Int::from(i128::from(i64::MAX) + 2);
        assert_eq!(big.to_i64_wrapping(), i64::MIN + 1);

        let negative = Int::from(-5i32);
        assert_eq!(negative.to_i64_wrapping(), -5);

        assert_eq!(Int::zero().to_i64_wrapping(), 0);
    }

    #[test]
    fn to_f64_saturates_beyond_range() {
        let huge = Int::from_str(&format!("1{}", "0".repeat(400))).expect("parse huge int");

        assert!(huge.to_f64().is_infinite());
        assert_eq!(Int::from(12i32).to_f64(), 12.0);
    }

    #[test]
    fn to_decimal_is_exact_within_range() {
        assert_eq!(Int::from(42i64).to_decimal(), Some(Decimal::from(42i64)));

        let huge = Int::from_str(&format!("9{}", "0".repeat(40))).expect("parse huge int");
        assert!(huge.to_decimal().is_none());
    }
}
