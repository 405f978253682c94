//! Error type definitions for provider operations

/// Primary error type returned by providers and the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No algorithm or driver is registered under this name
    NotFound {
        name: String,
    },

    /// Key length not accepted by the algorithm
    InvalidKeyLength {
        context: &'static str,
        actual: usize,
    },

    /// Authentication tag size not accepted by the algorithm
    InvalidTagSize {
        context: &'static str,
        actual: usize,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Keyed operation attempted before a key was set
    KeyRequired {
        context: &'static str,
    },

    /// Authentication failed error
    AuthenticationFailed {
        context: &'static str,
    },

    /// Random generation error
    RandomGeneration {
        context: &'static str,
        message: String,
    },

    /// Any other failure inside a primitive
    Processing {
        context: &'static str,
        message: String,
    },
}

/// Result type for provider operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for the "not available" signal
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    /// Shorthand to create an InvalidParameter error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// True when the registry has nothing under the requested name
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound { name } => {
                write!(f, "{}: not found", name)
            },
            Self::InvalidKeyLength { context, actual } => {
                write!(f, "{}: invalid key length {}", context, actual)
            },
            Self::InvalidTagSize { context, actual } => {
                write!(f, "{}: invalid tag size {}", context, actual)
            },
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::KeyRequired { context } => {
                write!(f, "{}: key required", context)
            },
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            },
            Self::RandomGeneration { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            },
            Self::Processing { context, message } => {
                write!(f, "Processing error in {}: {}", context, message)
            },
        }
    }
}
