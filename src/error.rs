//! Error types for filter operations.
//!
//! All fallible operations in this crate return [`Result<T>`] with
//! [`BloomsetError`] as the error type. Every error indicates caller misuse
//! (bad construction parameters, an out-of-range bit index, or an attempt to
//! combine filters that were built with different parameters); nothing is
//! retried or recovered internally, and a failing operation leaves the filter
//! untouched.
//!
//! # Error Propagation
//!
//! ```
//! use bloomset::{BloomFilter, Result};
//!
//! fn merged(a: &mut BloomFilter, b: &BloomFilter) -> Result<()> {
//!     a.union_with(b)?;
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BloomsetError>;

/// Errors that can occur while constructing or operating on a filter.
///
/// `Clone` + `PartialEq` enable testing and error comparison; every variant
/// carries the context needed to diagnose the misuse.
#[derive(Debug, Clone, PartialEq)]
pub enum BloomsetError {
    /// The expected element count is zero.
    ///
    /// Sizing divides by the capacity, so a filter tuned for zero elements
    /// is meaningless.
    InvalidCapacity {
        /// The invalid capacity that was provided.
        capacity: usize,
    },

    /// The target false-positive rate is outside the open interval (0, 1).
    ///
    /// A rate of 0 would require an infinite bit array; a rate of 1 accepts
    /// everything.
    ProbabilityOutOfBounds {
        /// The invalid probability that was provided.
        probability: f64,
    },

    /// A bit index at or past the end of the bit array was accessed.
    ///
    /// Raised by `get_bit`, `set_bit`, and `clear_bit` before any mutation
    /// takes place.
    OutOfRange {
        /// The invalid position that was accessed.
        position: usize,
        /// The length of the bit array.
        length: usize,
    },

    /// A union or intersection was attempted across filters built with
    /// different initial parameters.
    ///
    /// Raised before any bit in the receiver is touched, so the receiver is
    /// left unchanged.
    IncompatibleFilters {
        /// Which parameter differed, and how.
        reason: String,
    },
}

impl fmt::Display for BloomsetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid capacity: {}. Expected element count must be greater than 0.",
                    capacity
                )
            }
            Self::ProbabilityOutOfBounds { probability } => {
                write!(
                    f,
                    "False-positive probability {} is out of bounds. Must be in range (0, 1).",
                    probability
                )
            }
            Self::OutOfRange { position, length } => {
                write!(
                    f,
                    "Position {} is out of range for a bit array of length {}.",
                    position, length
                )
            }
            Self::IncompatibleFilters { reason } => {
                write!(
                    f,
                    "Bloom filters have different initial parameters: {}.",
                    reason
                )
            }
        }
    }
}

impl std::error::Error for BloomsetError {}

impl BloomsetError {
    /// Create an `InvalidCapacity` error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create a `ProbabilityOutOfBounds` error.
    #[must_use]
    pub fn probability_out_of_bounds(probability: f64) -> Self {
        Self::ProbabilityOutOfBounds { probability }
    }

    /// Create an `OutOfRange` error.
    #[must_use]
    pub fn out_of_range(position: usize, length: usize) -> Self {
        Self::OutOfRange { position, length }
    }

    /// Create an `IncompatibleFilters` error with a formatted reason.
    #[must_use]
    pub fn incompatible_filters(reason: impl Into<String>) -> Self {
        Self::IncompatibleFilters {
            reason: reason.into(),
        }
    }
}
