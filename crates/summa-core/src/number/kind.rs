use crate::{
    number::Number,
    types::{Decimal, Int},
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// NumericKind
///
/// Closed set of numeric representations a `Number` can carry.
///
/// IMPORTANT:
/// Tag values are part of stable behavior and must remain fixed.
///

#[repr(u8)]
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub enum NumericKind {
    Decimal = 1,
    IntBig = 2,
    Float64 = 3,
    Float32 = 4,
    Int64 = 5,
    #[default]
    Int32 = 6,
    Int16 = 7,
    Int8 = 8,
}

impl NumericKind {
    pub const ALL: [Self; 8] = [
        Self::Decimal,
        Self::IntBig,
        Self::Float64,
        Self::Float32,
        Self::Int64,
        Self::Int32,
        Self::Int16,
        Self::Int8,
    ];

    /// Stable wire/hash byte tag for this kind.
    #[must_use]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::IntBig => "IntBig",
            Self::Float64 => "Float64",
            Self::Float32 => "Float32",
            Self::Int64 => "Int64",
            Self::Int32 => "Int32",
            Self::Int16 => "Int16",
            Self::Int8 => "Int8",
        }
    }

    /// Promotion rank used by widening addition.
    ///
    /// Int8 < Int16 < Int32 < Int64 < IntBig < Float32 < Float64 < Decimal
    #[must_use]
    pub const fn widening_rank(self) -> u8 {
        match self {
            Self::Int8 => 0,
            Self::Int16 => 1,
            Self::Int32 => 2,
            Self::Int64 => 3,
            Self::IntBig => 4,
            Self::Float32 => 5,
            Self::Float64 => 6,
            Self::Decimal => 7,
        }
    }

    /// Return the kind that wins under widening promotion.
    #[must_use]
    pub const fn widest(self, other: Self) -> Self {
        if other.widening_rank() > self.widening_rank() {
            other
        } else {
            self
        }
    }

    /// Additive identity for this kind.
    #[must_use]
    pub fn zero(self) -> Number {
        match self {
            Self::Decimal => Number::Decimal(Decimal::ZERO),
            Self::IntBig => Number::IntBig(Int::zero()),
            Self::Float64 => Number::Float64(0.0),
            Self::Float32 => Number::Float32(0.0),
            Self::Int64 => Number::Int64(0),
            Self::Int32 => Number::Int32(0),
            Self::Int16 => Number::Int16(0),
            Self::Int8 => Number::Int8(0),
        }
    }
}
