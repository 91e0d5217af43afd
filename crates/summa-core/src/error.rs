use crate::{
    container::ConstructionError,
    materialize::{KeyError, MaterializeError},
    number::ArithmeticError,
    reduce::ReduceError,
    shape::ShapeError,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Every failure an engine call can report. All of them are raised before
/// any output is returned.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EngineError {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error(transparent)]
    Key(#[from] KeyError),

    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl EngineError {
    /// Stable classification of this error.
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Shape(err) if err.is_empty_input() => ErrorClass::EmptyInput,
            Self::Shape(_) => ErrorClass::UnsupportedShape,
            Self::Arithmetic(_) => ErrorClass::Unrepresentable,
            Self::Key(_) => ErrorClass::KeySizeMismatch,
            Self::Construction(_) => ErrorClass::ConstructionError,
        }
    }
}

impl From<ReduceError> for EngineError {
    fn from(err: ReduceError) -> Self {
        match err {
            ReduceError::Shape(err) => Self::Shape(err),
            ReduceError::Arithmetic(err) => Self::Arithmetic(err),
        }
    }
}

impl From<MaterializeError> for EngineError {
    fn from(err: MaterializeError) -> Self {
        match err {
            MaterializeError::Key(err) => Self::Key(err),
            MaterializeError::Construction(err) => Self::Construction(err),
        }
    }
}

///
/// ErrorClass
///
/// Closed failure taxonomy shared by every entry point.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ErrorClass {
    UnsupportedShape,
    EmptyInput,
    KeySizeMismatch,
    ConstructionError,
    Unrepresentable,
}

impl ErrorClass {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnsupportedShape => "unsupported_shape",
            Self::EmptyInput => "empty_input",
            Self::KeySizeMismatch => "key_size_mismatch",
            Self::ConstructionError => "construction_error",
            Self::Unrepresentable => "unrepresentable",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::NumericKind;

    #[test]
    fn empty_shapes_classify_as_empty_input() {
        let err = EngineError::from(ShapeError::EmptyGroup { index: 2 });
        assert_eq!(err.class(), ErrorClass::EmptyInput);

        let err = EngineError::from(ShapeError::EmptyInput { label: "Map" });
        assert_eq!(err.class(), ErrorClass::EmptyInput);
    }

    #[test]
    fn structural_shapes_classify_as_unsupported() {
        let err = EngineError::from(ShapeError::UnsupportedInput { label: "Null" });

        assert_eq!(err.class(), ErrorClass::UnsupportedShape);
        assert_eq!(err.class().to_string(), "unsupported_shape");
    }

    #[test]
    fn nested_errors_flatten_into_engine_error() {
        let err = EngineError::from(MaterializeError::Key(KeyError::SizeMismatch {
            keys: 1,
            groups: 2,
        }));
        assert_eq!(err.class(), ErrorClass::KeySizeMismatch);

        let err = EngineError::from(ReduceError::Arithmetic(ArithmeticError::Unrepresentable {
            kind: NumericKind::Decimal,
            value: "inf".to_string(),
        }));
        assert_eq!(err.class(), ErrorClass::Unrepresentable);
    }

    #[test]
    fn messages_carry_offending_sizes() {
        let err = EngineError::from(KeyError::SizeMismatch { keys: 3, groups: 4 });

        assert_eq!(
            err.to_string(),
            "key source has 3 keys but 4 groups need keys"
        );
    }
}
