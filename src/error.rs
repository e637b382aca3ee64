use std::num::ParseFloatError;

use thiserror::Error;

/// Top-level error type for the plangeo kernel.
#[derive(Debug, Error)]
pub enum PlangeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors raised while constructing or querying shapes.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not implemented: {0}")]
    Unimplemented(&'static str),
}

/// Errors raised while decoding the text form of a shape.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected {expected} numeric components, found {found}")]
    MissingComponent { expected: usize, found: usize },

    #[error("invalid number {token:?}")]
    InvalidNumber {
        token: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("unknown path segment tag {0:?}")]
    UnknownSegmentTag(String),
}

/// Convenience type alias for results using [`PlangeoError`].
pub type Result<T> = std::result::Result<T, PlangeoError>;

impl GeometryError {
    pub(crate) fn invalid(message: impl Into<String>) -> PlangeoError {
        Self::InvalidArgument(message.into()).into()
    }
}
