//! Error handling for cryptographic primitives

use std::borrow::Cow;
use std::fmt;

use fips140_api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Key of a length the algorithm does not accept
    KeyLength {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Length of the offered key
        actual: usize,
    },

    /// Tag size the algorithm does not accept
    TagSize {
        /// Algorithm that rejected the tag size
        algorithm: &'static str,
        /// Requested tag size
        actual: usize,
    },

    /// Keyed operation before a key was installed
    KeyNotSet {
        /// Algorithm missing its key
        algorithm: &'static str,
    },

    /// Authentication failure (e.g., AEAD tag verification)
    Authentication {
        /// Algorithm that failed authentication
        algorithm: &'static str,
    },

    /// Processing error during cryptographic operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => write!(f, "{name}: {reason}"),
            Error::Length { context, expected, actual } => {
                write!(f, "{context}: got {actual} bytes, needed {expected}")
            }
            Error::KeyLength { algorithm, actual } => {
                write!(f, "{algorithm}: {actual}-byte key not accepted")
            }
            Error::TagSize { algorithm, actual } => {
                write!(f, "{algorithm}: {actual}-byte tag not accepted")
            }
            Error::KeyNotSet { algorithm } => write!(f, "{algorithm}: no key installed"),
            Error::Authentication { algorithm } => write!(f, "{algorithm}: tag mismatch"),
            Error::Processing { operation, details } => write!(f, "{operation}: {details}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: match name {
                    Cow::Borrowed(s) => s,
                    Cow::Owned(_) => "parameter",
                },
                message: reason.into_owned(),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::KeyLength { algorithm, actual } => CoreError::InvalidKeyLength {
                context: algorithm,
                actual,
            },
            Error::TagSize { algorithm, actual } => CoreError::InvalidTagSize {
                context: algorithm,
                actual,
            },
            Error::KeyNotSet { algorithm } => CoreError::KeyRequired {
                context: algorithm,
            },
            Error::Authentication { algorithm } => CoreError::AuthenticationFailed {
                context: algorithm,
            },
            Error::Processing { operation, details } => CoreError::Processing {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

pub mod validate;
