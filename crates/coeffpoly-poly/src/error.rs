//! Errors raised by polynomial operations.

use thiserror::Error;

/// Errors that can occur when accessing a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A coefficient was requested past the end of the coefficient list.
    #[error("coefficient index {index} out of range for polynomial of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of stored coefficients.
        len: usize,
    },
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
