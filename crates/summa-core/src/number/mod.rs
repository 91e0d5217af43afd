//! Module: number
//! Responsibility: tagged numeric values, kind resolution, and addition policy.
//! Does not own: container traversal or output shaping.
//! Boundary: every arithmetic step of a reduction goes through `resolve_add`.

mod add;
mod compare;
mod kind;


use crate::types::{Decimal, Int};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

// re-exports
pub use add::{AdditionPolicy, resolve_add};
pub use compare::canonical_cmp;
pub use kind::NumericKind;

///
/// ArithmeticError
///
/// Raised when a sum cannot be represented in the kind the policy selected.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ArithmeticError {
    #[error("value {value} is not representable as {kind}")]
    Unrepresentable { kind: NumericKind, value: String },
}

///
/// Number
///
/// Immutable tagged numeric value.
///
/// Equality and ordering are canonical: the kind is part of identity, so
/// `Int32(6)` and `Int64(6)` are distinct, and floats compare by IEEE total
/// order.
///

#[derive(Clone, Debug, Deserialize, Serialize)]
pub enum Number {
    Decimal(Decimal),
    IntBig(Int),
    Float64(f64),
    Float32(f32),
    Int64(i64),
    Int32(i32),
    Int16(i16),
    Int8(i8),
}

impl Number {
    #[must_use]
    pub const fn kind(&self) -> NumericKind {
        match self {
            Self::Decimal(_) => NumericKind::Decimal,
            Self::IntBig(_) => NumericKind::IntBig,
            Self::Float64(_) => NumericKind::Float64,
            Self::Float32(_) => NumericKind::Float32,
            Self::Int64(_) => NumericKind::Int64,
            Self::Int32(_) => NumericKind::Int32,
            Self::Int16(_) => NumericKind::Int16,
            Self::Int8(_) => NumericKind::Int8,
        }
    }

    /// Zero of the same kind as `sample`, used to pre-fill sized outputs.
    #[must_use]
    pub fn zero_of(sample: &Self) -> Self {
        sample.kind().zero()
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Decimal(v) => v.is_zero(),
            Self::IntBig(v) => v.is_zero(),
            Self::Float64(v) => *v == 0.0,
            Self::Float32(v) => *v == 0.0,
            Self::Int64(v) => *v == 0,
            Self::Int32(v) => *v == 0,
            Self::Int16(v) => *v == 0,
            Self::Int8(v) => *v == 0,
        }
    }

    ///
    /// PRIMITIVE VIEWS
    ///
    /// Native narrowing semantics: integers keep their low bits, floats
    /// saturate toward the target range (NaN becomes zero), decimals and big
    /// integers truncate toward zero first.
    ///

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Decimal(v) => v.to_f64(),
            Self::IntBig(v) => v.to_f64(),
            Self::Float64(v) => *v,
            Self::Float32(v) => f64::from(*v),
            Self::Int64(v) => *v as f64,
            Self::Int32(v) => f64::from(*v),
            Self::Int16(v) => f64::from(*v),
            Self::Int8(v) => f64::from(*v),
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn as_f32(&self) -> f32 {
        match self {
            Self::Decimal(v) => v.to_f32(),
            Self::IntBig(v) => v.to_f32(),
            Self::Float64(v) => *v as f32,
            Self::Float32(v) => *v,
            Self::Int64(v) => *v as f32,
            Self::Int32(v) => *v as f32,
            Self::Int16(v) => f32::from(*v),
            Self::Int8(v) => f32::from(*v),
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i64(&self) -> i64 {
        match self {
            Self::Decimal(v) => v.trunc_i128() as i64,
            Self::IntBig(v) => v.to_i64_wrapping(),
            Self::Float64(v) => *v as i64,
            Self::Float32(v) => *v as i64,
            Self::Int64(v) => *v,
            Self::Int32(v) => i64::from(*v),
            Self::Int16(v) => i64::from(*v),
            Self::Int8(v) => i64::from(*v),
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i32(&self) -> i32 {
        match self {
            Self::Float64(v) => *v as i32,
            Self::Float32(v) => *v as i32,
            _ => self.as_i64() as i32,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i16(&self) -> i16 {
        match self {
            // floats saturate to i32 first, then keep the low 16 bits
            Self::Float64(_) | Self::Float32(_) => self.as_i32() as i16,
            _ => self.as_i64() as i16,
        }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn as_i8(&self) -> i8 {
        match self {
            Self::Float64(_) | Self::Float32(_) => self.as_i32() as i8,
            _ => self.as_i64() as i8,
        }
    }

    /// Exact big-integer view; fractional parts are truncated toward zero.
    #[must_use]
    pub fn as_int(&self) -> Int {
        match self {
            Self::Decimal(v) => Int::from(v.trunc_i128()),
            Self::IntBig(v) => v.clone(),
            Self::Float64(_) | Self::Float32(_) => Int::from(self.as_i64()),
            Self::Int64(v) => Int::from(*v),
            Self::Int32(v) => Int::from(*v),
            Self::Int16(v) => Int::from(*v),
            Self::Int8(v) => Int::from(*v),
        }
    }

    /// Decimal view; `None` when the value is outside the decimal domain.
    #[must_use]
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Self::Decimal(v) => Some(*v),
            Self::IntBig(v) => v.to_decimal(),
            Self::Float64(v) => Decimal::from_f64(*v),
            Self::Float32(v) => Decimal::from_f32(*v),
            Self::Int64(v) => Some(Decimal::from(*v)),
            Self::Int32(v) => Some(Decimal::from(*v)),
            Self::Int16(v) => Some(Decimal::from(*v)),
            Self::Int8(v) => Some(Decimal::from(*v)),
        }
    }

    /// Convert into `kind` using the primitive views above.
    pub fn convert_to(&self, kind: NumericKind) -> Result<Self, ArithmeticError> {
        let converted = match kind {
            NumericKind::Decimal => {
                Self::Decimal(self.as_decimal().ok_or_else(|| {
                    ArithmeticError::Unrepresentable {
                        kind,
                        value: self.to_string(),
                    }
                })?)
            }
            NumericKind::IntBig => Self::IntBig(self.as_int()),
            NumericKind::Float64 => Self::Float64(self.as_f64()),
            NumericKind::Float32 => Self::Float32(self.as_f32()),
            NumericKind::Int64 => Self::Int64(self.as_i64()),
            NumericKind::Int32 => Self::Int32(self.as_i32()),
            NumericKind::Int16 => Self::Int16(self.as_i16()),
            NumericKind::Int8 => Self::Int8(self.as_i8()),
        };

        Ok(converted)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(v) => write!(f, "{v}"),
            Self::IntBig(v) => write!(f, "{v}"),
            Self::Float64(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int8(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_number_from {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Number {
                fn from(n: $type) -> Self {
                    Self::$variant(n)
                }
            }
        )*
    };
}

impl_number_from!(
    Decimal => Decimal,
    Int => IntBig,
    f64 => Float64,
    f32 => Float32,
    i64 => Int64,
    i32 => Int32,
    i16 => Int16,
    i8 => Int8,
);
