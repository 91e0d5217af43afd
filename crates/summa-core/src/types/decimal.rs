use crate::traits::NumToPrimitive;
use derive_more::Display;
use rust_decimal::Decimal as WrappedDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

///
/// Decimal
///
/// Fixed-width decimal (96-bit mantissa, scale up to 28).
/// Magnitudes past roughly 7.9e28 are out of range. All arithmetic is
/// checked; overflow surfaces as `None`.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Decimal(WrappedDecimal);

impl Decimal {
    pub const ZERO: Self = Self(WrappedDecimal::ZERO);

    #[must_use]
    /// Construct a decimal from mantissa and scale.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(WrappedDecimal::new(num, scale))
    }

    /// Fallible conversion from an f64; `None` for non-finite or out-of-range input.
    ///
    /// The decimal is parsed from the shortest text that round-trips `n`, so
    /// `0.1 + 0.2` keeps its trailing `4`.
    #[must_use]
    pub fn from_f64(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }

        WrappedDecimal::from_str(&n.to_string()).ok().map(Self)
    }

    /// Fallible conversion from an f32; `None` for non-finite or out-of-range input.
    #[must_use]
    pub fn from_f32(n: f32) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }

        WrappedDecimal::from_str(&n.to_string()).ok().map(Self)
    }

    /// Checked addition.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Integer part, truncated toward zero.
    #[must_use]
    pub const fn trunc_i128(&self) -> i128 {
        // scale <= 28, so 10^scale always fits in an i128
        self.0.mantissa() / 10i128.pow(self.0.scale())
    }

    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }

    #[must_use]
    pub fn to_f32(&self) -> f32 {
        self.0.to_f32().unwrap_or_default()
    }

    /// Returns the number of fractional decimal places.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Returns the mantissa component.
    #[must_use]
    pub const fn mantissa(&self) -> i128 {
        self.0.mantissa()
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    /// Normalize trailing zeros.
    pub fn normalize(&self) -> Self {
        Self(self.0.normalize())
    }
}

impl From<WrappedDecimal> for Decimal {
    fn from(d: WrappedDecimal) -> Self {
        Self(d)
    }
}

macro_rules! impl_decimal_from_int {
    ( $( $type:ty ),* ) => {
        $(
            impl From<$type> for Decimal {
                fn from(n: $type) -> Self {
                    Self(WrappedDecimal::from(n))
                }
            }
        )*
    };
}

impl_decimal_from_int!(i8, i16, i32, i64);

impl FromStr for Decimal {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WrappedDecimal::from_str(s).map(Self)
    }
}

// Serde:
// - Human-readable formats (e.g. JSON) use a decimal string.
// - Binary formats use the (mantissa, scale) parts.
impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if serializer.is_human_readable() {
            return serializer.serialize_str(&self.0.to_string());
        }

        (self.mantissa(), self.scale()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            return s.parse::<Self>().map_err(serde::de::Error::custom);
        }

        let (mantissa, scale) = <(i128, u32)>::deserialize(deserializer)?;
        WrappedDecimal::try_from_i128_with_scale(mantissa, scale)
            .map(Self)
            .map_err(|err| serde::de::Error::custom(format!("invalid decimal parts: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trunc_i128_drops_fraction_toward_zero() {
        assert_eq!(Decimal::new(1299, 2).trunc_i128(), 12);
        assert_eq!(Decimal::new(-1299, 2).trunc_i128(), -12);
        assert_eq!(Decimal::new(7, 0).trunc_i128(), 7);
    }

    #[test]
    fn from_f64_rejects_non_finite() {
        assert!(Decimal::from_f64(f64::NAN).is_none());
        assert!(Decimal::from_f64(f64::INFINITY).is_none());
        assert_eq!(Decimal::from_f64(3.75), Some(Decimal::new(375, 2)));
    }

    #[test]
    fn from_f64_keeps_shortest_round_trip_digits() {
        let expected = Decimal::from_str("0.30000000000000004").expect("parse decimal");

        assert_eq!(Decimal::from_f64(0.1 + 0.2), Some(expected));
        assert_eq!(Decimal::from_f64(-2.5), Some(Decimal::new(-25, 1)));
        assert_eq!(Decimal::from_f32(0.1), Some(Decimal::new(1, 1)));
    }

    #[test]
    fn from_f64_rejects_values_past_decimal_range() {
        let large = Decimal::from_str("100000000000000000000").expect("parse decimal");

        assert_eq!(Decimal::from_f64(1e20), Some(large));
        assert!(Decimal::from_f64(1e30).is_none());
    }

    #[test]
    fn checked_add_reports_overflow() {
        let max = Decimal::from(WrappedDecimal::MAX);

        assert!(max.checked_add(Decimal::from(1i32)).is_none());
        assert_eq!(
            Decimal::new(15, 1).checked_add(Decimal::new(25, 1)),
            Some(Decimal::new(40, 1))
        );
    }

    #[test]
    fn json_uses_decimal_string() {
        let json = serde_json::to_string(&Decimal::new(1234, 2)).expect("serialize decimal");
        assert_eq!(json, "\"12.34\"");

        let back: Decimal = serde_json::from_str(&json).expect("deserialize decimal");
        assert_eq!(back, Decimal::new(1234, 2));
    }
}
