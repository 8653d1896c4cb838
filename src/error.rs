use core::fmt;

/// Errors raised by the projection and area routines.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The caller passed something the computation is not defined for.
    InvalidInput(String),
    /// The reference projection (proj4rs) rejected its setup or a point.
    Projection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            Error::Projection(msg) => write!(f, "projection error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
