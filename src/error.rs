//! Error types for Matriz operations.
//!
//! Provides rich error context for library consumers.

use std::fmt;

/// Main error type for Matriz operations.
///
/// Every public entry point whose precondition can be violated by a
/// caller reports the violation through this type: shape mismatches in
/// matrix arithmetic, length mismatches in buffer and row/column
/// assignments, and mismatched operands to the vector helpers.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "3x2".to_string(),
///     actual: "2x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// Matrix dimensions don't match for the operation.
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// A supplied buffer, row, or column has the wrong number of elements.
    LengthMismatch {
        /// Number of elements required
        expected: usize,
        /// Number of elements supplied
        actual: usize,
    },

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Matrix dimension mismatch: expected {expected}, got {actual}"
                )
            }
            MatrizError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Length mismatch: expected {expected} elements, got {actual}"
                )
            }
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl MatrizError {
    /// Create a dimension mismatch error from two (rows, cols) shapes.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

impl PartialEq for MatrizError {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl PartialEq<MatrizError> for &str {
    fn eq(&self, other: &MatrizError) -> bool {
        *self == other.to_string()
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, MatrizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = MatrizError::DimensionMismatch {
            expected: "3x2".to_string(),
            actual: "2x3".to_string(),
        };
        assert!(err.to_string().contains("dimension mismatch"));
        assert!(err.to_string().contains("3x2"));
        assert!(err.to_string().contains("2x3"));
    }

    #[test]
    fn test_shape_mismatch_helper() {
        let err = MatrizError::shape_mismatch((3, 2), (2, 2));
        assert!(err.to_string().contains("3x2"));
        assert!(err.to_string().contains("2x2"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = MatrizError::LengthMismatch {
            expected: 6,
            actual: 4,
        };
        assert!(err.to_string().contains("Length mismatch"));
        assert!(err.to_string().contains('6'));
        assert!(err.to_string().contains('4'));
    }

    #[test]
    fn test_from_str() {
        let err: MatrizError = "custom failure".into();
        assert_eq!(err.to_string(), "custom failure");
    }

    #[test]
    fn test_error_eq_str() {
        let err = MatrizError::Other("test error".to_string());
        assert!(err == "test error".into());
        assert!("test error" == err);
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let err = MatrizError::Other("test".to_string());
        assert!(err.source().is_none());
    }
}
