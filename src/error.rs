//! Error types for vector operations.

use thiserror::Error;

/// Errors that can occur during vector operations.
///
/// The arithmetic surface is total and never reports through this type;
/// only the checked index accessors do.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// Component index is outside the valid range `0..=2`.
    #[error("index {index} is out of bounds: valid component indices are 0, 1, 2")]
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
    },
}

impl VectorError {
    /// Create an index out of bounds error.
    #[must_use]
    pub const fn index_out_of_bounds(index: usize) -> Self {
        Self::IndexOutOfBounds { index }
    }

    /// Check if this is an index out of bounds error.
    #[must_use]
    pub const fn is_index_out_of_bounds(&self) -> bool {
        matches!(self, Self::IndexOutOfBounds { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VectorError::index_out_of_bounds(7);
        assert!(err.to_string().contains("index 7"));
        assert!(err.to_string().contains("0, 1, 2"));
    }

    #[test]
    fn test_error_predicates() {
        let err = VectorError::index_out_of_bounds(3);
        assert!(err.is_index_out_of_bounds());
        assert_eq!(err, VectorError::IndexOutOfBounds { index: 3 });
    }
}
