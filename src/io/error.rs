//! Error types shared by tiling, configuration and workflow helpers

use std::fmt;
use std::path::PathBuf;

/// Main error type for all crate operations
#[derive(Debug)]
pub enum TilingError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Input data doesn't meet the operation's requirements
    InvalidSourceData {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// A volume's shape differs from the first volume in the batch
    ShapeMismatch {
        /// Position of the offending volume in the input
        index: usize,
        /// Shape of the first volume
        expected: [usize; 3],
        /// Shape of the offending volume
        found: [usize; 3],
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration could not be parsed, merged or validated
    Configuration {
        /// Where the problem was found (file path or override)
        origin: String,
        /// Description of the failure
        reason: String,
    },

    /// JSON encoding or decoding failed
    Serialization {
        /// What was being encoded or decoded
        subject: &'static str,
        /// Underlying serde error
        source: serde_json::Error,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::ShapeMismatch {
                index,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Volume {index} has shape {}x{}x{}, expected {}x{}x{}",
                    found[0], found[1], found[2], expected[0], expected[1], expected[2]
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Configuration { origin, reason } => {
                write!(f, "Configuration error in {origin}: {reason}")
            }
            Self::Serialization { subject, source } => {
                write!(f, "Serialization error in {subject}: {source}")
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, TilingError>;

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TilingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            subject: "json",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a configuration error
pub fn configuration_error(origin: &impl ToString, reason: &impl ToString) -> TilingError {
    TilingError::Configuration {
        origin: origin.to_string(),
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to an I/O error
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> TilingError {
    let path = path.into();
    move |source| TilingError::FileSystem {
        path,
        operation,
        source,
    }
}
