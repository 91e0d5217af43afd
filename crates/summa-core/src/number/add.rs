use crate::{
    number::{ArithmeticError, Number, NumericKind},
    types::Decimal,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// AdditionPolicy
///
/// Selects which kind the sum of two numbers is expressed in.
///
/// `TrailingKind` keeps compatibility with legacy summation: the result takes
/// the kind of the right-hand operand, so fold order decides the final kind.
/// `Widening` promotes both operands to the wider of the two kinds.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdditionPolicy {
    #[default]
    TrailingKind,
    Widening,
}

/// Add `a` and `b` under `policy`.
pub fn resolve_add(
    a: &Number,
    b: &Number,
    policy: AdditionPolicy,
) -> Result<Number, ArithmeticError> {
    match policy {
        AdditionPolicy::TrailingKind => add_trailing(a, b),
        AdditionPolicy::Widening => add_widening(a, b),
    }
}

// Result kind is always b's kind; a is viewed in b's representation first.
fn add_trailing(a: &Number, b: &Number) -> Result<Number, ArithmeticError> {
    let sum = match b {
        Number::Decimal(_) => {
            // the f64 sum is read back through its shortest round-trip text
            let sum = a.as_f64() + b.as_f64();
            Number::Decimal(
                Decimal::from_f64(sum).ok_or_else(|| ArithmeticError::Unrepresentable {
                    kind: NumericKind::Decimal,
                    value: sum.to_string(),
                })?,
            )
        }
        Number::IntBig(_) => Number::IntBig(a.as_i64().wrapping_add(b.as_i64()).into()),
        Number::Float64(v) => Number::Float64(a.as_f64() + v),
        Number::Float32(v) => Number::Float32(a.as_f32() + v),
        Number::Int64(v) => Number::Int64(a.as_i64().wrapping_add(*v)),
        Number::Int32(v) => Number::Int32(a.as_i32().wrapping_add(*v)),
        Number::Int16(v) => Number::Int16(a.as_i16().wrapping_add(*v)),
        Number::Int8(v) => Number::Int8(a.as_i8().wrapping_add(*v)),
    };

    Ok(sum)
}

// Result kind is the wider of the two kinds; decimal and big-integer sums are exact.
fn add_widening(a: &Number, b: &Number) -> Result<Number, ArithmeticError> {
    let kind = a.kind().widest(b.kind());
    let left = a.convert_to(kind)?;
    let right = b.convert_to(kind)?;

    let sum = match (left, right) {
        (Number::Decimal(x), Number::Decimal(y)) => {
            Number::Decimal(x.checked_add(y).ok_or_else(|| {
                ArithmeticError::Unrepresentable {
                    kind,
                    value: format!("{x} + {y}"),
                }
            })?)
        }
        (Number::IntBig(x), Number::IntBig(y)) => Number::IntBig(x + y),
        (Number::Float64(x), Number::Float64(y)) => Number::Float64(x + y),
        (Number::Float32(x), Number::Float32(y)) => Number::Float32(x + y),
        (Number::Int64(x), Number::Int64(y)) => Number::Int64(x.wrapping_add(y)),
        (Number::Int32(x), Number::Int32(y)) => Number::Int32(x.wrapping_add(y)),
        (Number::Int16(x), Number::Int16(y)) => Number::Int16(x.wrapping_add(y)),
        (Number::Int8(x), Number::Int8(y)) => Number::Int8(x.wrapping_add(y)),
        (left, right) => {
            // convert_to always yields the requested kind for both sides
            return Err(ArithmeticError::Unrepresentable {
                kind,
                value: format!("{left} + {right}"),
            });
        }
    };

    Ok(sum)
}
