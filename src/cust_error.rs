//! This module contains all custom errors used in this library.

use std::fmt;
use std::error::Error;

/// Errors raised while reading a graph, before any search starts.
#[derive(Debug)]
pub enum ImportError {
    IoError(std::io::Error),
    InputMalformedError(String),
    BadIntError(std::num::ParseIntError),
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> ImportError {
        ImportError::IoError(e)
    }
}

impl From<std::num::ParseIntError> for ImportError {
    fn from(e: std::num::ParseIntError) -> ImportError {
        ImportError::BadIntError(e)
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "Import: IoError ({})", e),
            Self::InputMalformedError(msg) => write!(f, "Import: Input is malformed: {}", msg),
            Self::BadIntError(e) => write!(f, "Import: Integer is malformed ({}).", e),
        }
    }
}

impl Error for ImportError {}

#[derive(Debug)]
pub enum ProcessingError {
    InvalidParameter(String),
    /// The decision trail and the frontier disagree. Always a bug, the run has to be aborted.
    InternalInvariantViolation(String),
    InvalidSolution(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Self::InternalInvariantViolation(msg) => write!(f, "Internal invariant violated: {}", msg),
            Self::InvalidSolution(msg) => write!(f, "InvalidSolution: {}", msg),
        }
    }
}

impl Error for ProcessingError {}
