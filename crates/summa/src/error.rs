use derive_more::Display;
use serde::{Deserialize, Serialize};
use summa_config::ConfigError;
use summa_core::error::{EngineError, ErrorClass};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        let kind = match err.class() {
            ErrorClass::UnsupportedShape => ErrorKind::Input(InputErrorKind::UnsupportedShape),
            ErrorClass::EmptyInput => ErrorKind::Input(InputErrorKind::EmptyInput),
            ErrorClass::KeySizeMismatch => ErrorKind::Output(OutputErrorKind::KeySizeMismatch),
            ErrorClass::ConstructionError => ErrorKind::Output(OutputErrorKind::Construction),
            ErrorClass::Unrepresentable => ErrorKind::Unrepresentable,
        };

        Self::new(kind, ErrorOrigin::Engine, err.to_string())
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        let kind = match err {
            ConfigError::Io { .. } => ConfigErrorKind::Io,
            ConfigError::Parse(_) => ConfigErrorKind::Invalid,
            ConfigError::Descriptor(_) => ConfigErrorKind::UnknownDescriptor,
        };

        Self::new(ErrorKind::Config(kind), ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    Input(InputErrorKind),
    Output(OutputErrorKind),
    Config(ConfigErrorKind),

    /// A sum has no value in the kind the addition policy selected.
    Unrepresentable,
}

///
/// InputErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum InputErrorKind {
    /// Input, element, or key source is not a number, sequence, or mapping.
    UnsupportedShape,

    /// A sequence or mapping with no elements where a group is required.
    EmptyInput,
}

///
/// OutputErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum OutputErrorKind {
    /// Fewer supplied keys than groups.
    KeySizeMismatch,

    /// The output container could not be constructed.
    Construction,
}

///
/// ConfigErrorKind
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigErrorKind {
    Io,
    Invalid,
    UnknownDescriptor,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Engine,
}
