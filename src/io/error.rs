//! Error types and context management for batch operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all batch, checking and command-line operations
///
/// Infeasible queries are not errors; they are reported through
/// [`crate::Outcome::Infeasible`].
#[derive(Debug)]
pub enum KiteError {
    /// A batch token is not an unsigned integer of the expected width
    Parse {
        /// Zero-based index of the token within the batch
        position: usize,
        /// The offending token
        token: String,
        /// Why the token was refused
        reason: &'static str,
    },

    /// The header announced a different number of values than were supplied
    TokenCount {
        /// Tokens implied by the header, header included
        expected: usize,
        /// Tokens actually present
        found: usize,
    },

    /// Query or command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Results text breaks the one-integer-per-line protocol
    OutputFormat {
        /// Description of the formatting fault
        reason: String,
    },

    /// A reported result contradicts its query
    Rejected {
        /// One-based case number within the batch
        case: usize,
        /// Which constraint the result violates
        reason: String,
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

impl fmt::Display for KiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse {
                position,
                token,
                reason,
            } => {
                write!(f, "Token {position} ('{token}') is invalid: {reason}")
            }
            Self::TokenCount { expected, found } => {
                write!(
                    f,
                    "Expected {expected} tokens (t + 4*t), found {found}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::OutputFormat { reason } => {
                write!(f, "Output formatting error: {reason}")
            }
            Self::Rejected { case, reason } => {
                write!(f, "Case {case}: {reason}")
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

impl std::error::Error for KiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for batch results
pub type Result<T> = std::result::Result<T, KiteError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// One-based case number being processed
    pub case: Option<usize>,
    /// File being read or written
    pub path: Option<PathBuf>,
    /// Operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches errors with the case or file they arose from
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the case number
    ///
    /// # Errors
    ///
    /// Propagates the original error with the case number applied
    fn with_case(self, case: usize) -> Result<T>;

    /// Add the file path and the operation attempted on it
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path context applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<KiteError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            match &mut error {
                KiteError::Rejected { case, .. } => {
                    if let Some(number) = context.case {
                        *case = number;
                    }
                }
                KiteError::FileSystem {
                    path, operation, ..
                } => {
                    if let Some(new_path) = context.path {
                        *path = new_path;
                    }
                    if let Some(new_operation) = context.operation {
                        *operation = new_operation;
                    }
                }
                _ => {}
            }
            error
        })
    }

    fn with_case(self, case: usize) -> Result<T> {
        self.with_context(ErrorContext {
            case: Some(case),
            ..Default::default()
        })
    }

    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            path: Some(path.to_path_buf()),
            operation: Some(operation),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for KiteError {
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
) -> KiteError {
    KiteError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a token parse error
pub fn parse_error(position: usize, token: &str, reason: &'static str) -> KiteError {
    KiteError::Parse {
        position,
        token: token.to_string(),
        reason,
    }
}

/// Create a rejection whose case number is filled in later via [`WithContext::with_case`]
pub fn rejected(reason: &impl ToString) -> KiteError {
    KiteError::Rejected {
        case: 0,
        reason: reason.to_string(),
    }
}

/// Create an output formatting error
pub fn output_format(reason: &impl ToString) -> KiteError {
    KiteError::OutputFormat {
        reason: reason.to_string(),
    }
}
