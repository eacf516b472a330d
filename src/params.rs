//! Filter sizing formulas.
//!
//! Given an expected element count `n` (the capacity) and a target
//! false-positive probability `p`, the classic analysis gives:
//!
//! ```text
//! m = ⌈-n × ln(p) / (ln 2)²⌉     (bits in the array)
//! k = ⌈ln(2) × ⌊m / n⌋⌉          (hash functions per element)
//! ```
//!
//! The `k` formula intentionally floors `m / n` to a whole bits-per-element
//! ratio before multiplying. A real-valued ratio would occasionally round to
//! a different `k` (e.g. `m/n = 10.9` gives 8 real-valued but 7 floored);
//! the floored form is what this crate's sizing table is built on and must
//! not be "corrected".
//!
//! # Examples
//!
//! ```
//! use bloomset::params::{bit_count, hash_count};
//!
//! let m = bit_count(100, 0.01).unwrap();
//! assert_eq!(m, 959);
//! assert_eq!(hash_count(m, 100), 7);
//! ```
//!
//! # References
//!
//! - Bloom, B. H. (1970). "Space/Time Trade-offs in Hash Coding with
//!   Allowable Errors"

use crate::error::{BloomsetError, Result};
use std::f64::consts::LN_2;

/// Mathematical constant: (ln 2)² ≈ 0.4804530139182014.
const LN2_SQUARED: f64 = LN_2 * LN_2;

/// Default expected element count used by [`crate::BloomFilter::default`]
/// and [`crate::FilterBuilder`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Default target false-positive probability (1%).
pub const DEFAULT_PROBABILITY: f64 = 0.01;

/// Calculate the bit-array length for the given constraints.
///
/// Implements `m = ⌈-capacity × ln(probability) / (ln 2)²⌉`.
///
/// # Errors
///
/// - [`BloomsetError::InvalidCapacity`] if `capacity == 0`
/// - [`BloomsetError::ProbabilityOutOfBounds`] if `probability` is not in (0, 1)
///
/// # Examples
///
/// ```
/// use bloomset::params::bit_count;
///
/// assert_eq!(bit_count(100, 0.01).unwrap(), 959);
/// assert_eq!(bit_count(1000, 0.001).unwrap(), 14_378);
/// ```
pub fn bit_count(capacity: usize, probability: f64) -> Result<usize> {
    if capacity == 0 {
        return Err(BloomsetError::invalid_capacity(capacity));
    }
    if probability <= 0.0 || probability >= 1.0 {
        return Err(BloomsetError::probability_out_of_bounds(probability));
    }

    let m = -(capacity as f64) * probability.ln() / LN2_SQUARED;
    Ok(m.ceil() as usize)
}

/// Calculate the number of hash functions for a filter of `bit_count` bits
/// tuned for `capacity` elements.
///
/// Implements `k = ⌈ln(2) × ⌊bit_count / capacity⌋⌉`. The whole-number
/// bits-per-element ratio is deliberate; see the module docs.
///
/// `capacity` must be non-zero (guaranteed when `bit_count` came from
/// [`bit_count`], which validates it).
///
/// # Examples
///
/// ```
/// use bloomset::params::hash_count;
///
/// assert_eq!(hash_count(959, 100), 7);
/// assert_eq!(hash_count(14_378, 1000), 10);
/// ```
#[must_use]
pub fn hash_count(bit_count: usize, capacity: usize) -> usize {
    (LN_2 * (bit_count / capacity) as f64).ceil() as usize
}
