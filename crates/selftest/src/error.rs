//! Error taxonomy of the self-tests

use std::fmt;

use thiserror::Error;

/// Operation of a primitive under test, as named in failure messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Forward direction of a cipher
    Encryption,
    /// Inverse direction of a cipher
    Decryption,
    /// Hash or MAC computation
    Digest,
    /// DRBG instantiation from test entropy
    Reset,
    /// DRBG output generation
    GetBytes,
}

impl Operation {
    /// Name used in log lines
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Encryption => "encryption",
            Operation::Decryption => "decryption",
            Operation::Digest => "digest",
            Operation::Reset => "reset",
            Operation::GetBytes => "get_bytes",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why one implementation failed its self-test
///
/// An unavailable implementation is not an error; it is reported as a skip.
#[derive(Debug, Error)]
pub enum SelftestError {
    /// The implementation produced the wrong answer
    #[error("wrong result from {implementation} {operation}")]
    BadMessage {
        /// Implementation under test
        implementation: String,
        /// Step that went wrong
        operation: Operation,
    },

    /// A native size of the implementation disagrees with the vector
    #[error("{implementation} has wrong {parameter} size: expected {expected}, got {actual}")]
    ConfigMismatch {
        /// Implementation under test
        implementation: String,
        /// `"IV"` or `"digest"`
        parameter: &'static str,
        /// Size the vector needs
        expected: usize,
        /// Size the implementation reports
        actual: usize,
    },

    /// The implementation rejected the vector's key
    #[error("failed to set {implementation} key")]
    KeySetup {
        /// Implementation under test
        implementation: String,
        /// Provider error
        #[source]
        source: fips140_api::Error,
    },

    /// The implementation rejected the vector's tag size
    #[error("failed to set {implementation} authentication tag size")]
    TagSize {
        /// Implementation under test
        implementation: String,
        /// Provider error
        #[source]
        source: fips140_api::Error,
    },

    /// The registry handed out an asynchronous implementation
    #[error("unexpectedly got async implementation of {name} ({driver})")]
    AsyncImplementation {
        /// Name that was requested
        name: String,
        /// Driver the registry returned
        driver: String,
    },

    /// A scratch buffer could not be allocated
    #[error("out of memory testing {implementation}")]
    OutOfMemory {
        /// Implementation under test
        implementation: String,
    },

    /// The registry failed for a reason other than absence
    #[error("failed to allocate {implementation} tfm")]
    Allocation {
        /// Implementation under test
        implementation: String,
        /// Provider error
        #[source]
        source: fips140_api::Error,
    },

    /// A primitive call returned an error
    #[error("{implementation} {operation} failed")]
    Operation {
        /// Implementation under test
        implementation: String,
        /// Step that went wrong
        operation: Operation,
        /// Provider error
        #[source]
        source: fips140_api::Error,
    },

    /// A descriptor's vector violates the shape its executor requires
    #[error("malformed test vector for {algorithm}: {reason}")]
    MalformedVector {
        /// Algorithm of the descriptor
        algorithm: &'static str,
        /// What is wrong with the vector
        reason: &'static str,
    },
}

impl SelftestError {
    /// Operation the failure happened in, when there is one
    pub fn operation(&self) -> Option<Operation> {
        match self {
            SelftestError::BadMessage { operation, .. }
            | SelftestError::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Implementation the failure is attributed to, when there is one
    pub fn implementation(&self) -> Option<&str> {
        match self {
            SelftestError::BadMessage { implementation, .. }
            | SelftestError::ConfigMismatch { implementation, .. }
            | SelftestError::KeySetup { implementation, .. }
            | SelftestError::TagSize { implementation, .. }
            | SelftestError::OutOfMemory { implementation }
            | SelftestError::Allocation { implementation, .. }
            | SelftestError::Operation { implementation, .. } => Some(implementation.as_str()),
            SelftestError::AsyncImplementation { driver, .. } => Some(driver.as_str()),
            SelftestError::MalformedVector { .. } => None,
        }
    }

    /// True for a result mismatch, as opposed to any other failure
    pub fn is_bad_message(&self) -> bool {
        matches!(self, SelftestError::BadMessage { .. })
    }
}

/// Result type for the self-tests
pub type Result<T> = std::result::Result<T, SelftestError>;
