use derive_more::Display;
use ormdef_core::error::{BuildError, InputError, UnsupportedTypeError};
use serde::{Deserialize, Serialize};
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

impl From<BuildError> for Error {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::UnsupportedType { .. } => {
                Self::new(ErrorKind::UnsupportedType, ErrorOrigin::Mapper, err.to_string())
            }
            BuildError::Input(err) => err.into(),
        }
    }
}

impl From<InputError> for Error {
    fn from(err: InputError) -> Self {
        Self::new(ErrorKind::InvalidInput, ErrorOrigin::Model, err.to_string())
    }
}

impl From<UnsupportedTypeError> for Error {
    fn from(err: UnsupportedTypeError) -> Self {
        Self::new(ErrorKind::UnsupportedType, ErrorOrigin::Mapper, err.to_string())
    }
}

#[cfg(feature = "config")]
impl From<ormdef_config::ConfigError> for Error {
    fn from(err: ormdef_config::ConfigError) -> Self {
        Self::new(ErrorKind::Config, ErrorOrigin::Config, err.to_string())
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// An attribute type has no JSON Schema projection.
    UnsupportedType,

    /// The model's attribute metadata is missing or malformed.
    InvalidInput,

    /// Configuration could not be read or parsed.
    Config,
}

///
/// ErrorOrigin
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Config,
    Mapper,
    Model,
}
