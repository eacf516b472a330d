//! Builder for [`BloomFilter`] construction with defaulted parameters.
//!
//! Both tuning parameters have well-known defaults (capacity 100,
//! probability 1%), so the builder starts complete and every setter is
//! optional:
//!
//! ```
//! use bloomset::FilterBuilder;
//!
//! let filter = FilterBuilder::new()
//!     .capacity(10_000)
//!     .probability(0.001)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(filter.capacity(), 10_000);
//! ```

use crate::error::Result;
use crate::filter::BloomFilter;
use crate::hash::BloomHasher;
use crate::params::{DEFAULT_CAPACITY, DEFAULT_PROBABILITY};

/// Builder for [`BloomFilter`] instances.
#[derive(Debug, Clone)]
pub struct FilterBuilder {
    capacity: usize,
    probability: f64,
}

impl FilterBuilder {
    /// Create a builder with the default parameters
    /// ([`DEFAULT_CAPACITY`], [`DEFAULT_PROBABILITY`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            probability: DEFAULT_PROBABILITY,
        }
    }

    /// Set the expected number of distinct elements.
    #[must_use]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the target false-positive probability.
    #[must_use]
    pub fn probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }

    /// Build the filter with the default hasher.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`BloomFilter::new`] for a zero
    /// capacity or a probability outside (0, 1).
    pub fn build(self) -> Result<BloomFilter> {
        BloomFilter::new(self.capacity, self.probability)
    }

    /// Build the filter with a custom base hasher.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build).
    pub fn build_with_hasher<H>(self, hasher: H) -> Result<BloomFilter<H>>
    where
        H: BloomHasher + Clone,
    {
        BloomFilter::with_hasher(self.capacity, self.probability, hasher)
    }
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::Xxh3Hasher;

    #[test]
    fn test_build_with_defaults() {
        let filter = FilterBuilder::new().build().unwrap();
        assert_eq!(filter.capacity(), 100);
        assert_eq!(filter.probability(), 0.01);
        assert_eq!(filter.bit_size(), 959);
        assert_eq!(filter.hash_count(), 7);
    }

    #[test]
    fn test_build_with_explicit_params() {
        let filter = FilterBuilder::new()
            .capacity(1000)
            .probability(0.001)
            .build()
            .unwrap();
        assert_eq!(filter.bit_size(), 14_378);
        assert_eq!(filter.hash_count(), 10);
    }

    #[test]
    fn test_build_rejects_invalid_params() {
        assert!(FilterBuilder::new().capacity(0).build().is_err());
        assert!(FilterBuilder::new().probability(1.0).build().is_err());
    }

    #[test]
    fn test_build_with_hasher() {
        let mut filter = FilterBuilder::new()
            .build_with_hasher(Xxh3Hasher::with_seed(7))
            .unwrap();
        filter.add("value");
        assert!(filter.contains("value"));
    }
}
