//! Error enum
use std::fmt;

use crate::io::ReleaseError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// No stream registered under this alias.
    NotFound(String),
    /// The alias exists but the set is not in its acquired phase.
    NotAcquired(String),
    /// The set has already been released and cannot be acquired again.
    Released,
    /// The stream is currently borrowed through [crate::io::AcquiredSet::stream].
    Busy(String),
    InvalidMode(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::NotFound(alias) => {
                write!(f, "No multiplexed input/output called '{}'", alias)
            }
            Error::NotAcquired(alias) => write!(f, "stream '{}' is not open", alias),
            Error::Released => write!(f, "stream set has already been released"),
            Error::Busy(alias) => write!(f, "stream '{}' is already borrowed", alias),
            Error::InvalidMode(mode) => write!(f, "invalid open mode '{}'", mode),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ReleaseError> for Error {
    fn from(e: ReleaseError) -> Error {
        e.into_error()
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}
