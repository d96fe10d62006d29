//! Error types for maze allocation, generation, solving and image I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Grid dimensions are zero or too large to allocate
    InvalidDimensions {
        /// Requested width in cells
        width: usize,
        /// Requested height in cells
        height: usize,
        /// Explanation of why the dimensions were rejected
        reason: String,
    },

    /// The grid cannot produce a solvable maze
    ///
    /// Occurs when:
    /// - A default corner start or end cell is excluded and no candidates exist
    /// - Start or end refers to an excluded or out-of-bounds cell
    /// - Start and end fall in regions that exclusions keep apart
    InvalidConfiguration {
        /// Description of the unusable configuration
        reason: String,
    },

    /// Template classification contains a role code that is not recognized
    InvalidTemplate {
        /// Description of what's wrong with the template
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A topology invariant was violated
    ///
    /// Indicates a bug rather than bad input, and is never retried.
    Internal {
        /// Name of the operation that detected the violation
        operation: &'static str,
        /// Description of the violation
        reason: String,
    },

    /// Failed to load a template image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a rendered maze to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => {
                write!(f, "Invalid maze dimensions {width}x{height}: {reason}")
            }
            Self::InvalidConfiguration { reason } => {
                write!(f, "Invalid maze configuration: {reason}")
            }
            Self::InvalidTemplate { reason } => {
                write!(f, "Invalid template: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Internal { operation, reason } => {
                write!(f, "Internal error in {operation}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
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
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MazeError {
    /// Whether the error signals a broken invariant rather than bad input
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(reason: &impl ToString) -> MazeError {
    MazeError::InvalidConfiguration {
        reason: reason.to_string(),
    }
}

/// Create an internal invariant violation error
pub fn internal_error(operation: &'static str, reason: &impl ToString) -> MazeError {
    MazeError::Internal {
        operation,
        reason: reason.to_string(),
    }
}
