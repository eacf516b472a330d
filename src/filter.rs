//! The Bloom filter itself.
//!
//! # Algorithm
//!
//! A Bloom filter represents a set as an array of `m` bits, all initially
//! zero. Inserting an element derives `k` bit positions from its hash and
//! sets them; a membership query re-derives the same positions and reports
//! true iff all are set. The structure can report a value it never saw
//! (false positive, probability tuned at construction) but never misses a
//! value it did see (no false negatives).
//!
//! Sizing follows the classic analysis: for a target capacity `n` and
//! false-positive probability `p`, `m = ⌈-n·ln(p)/(ln 2)²⌉` and
//! `k = ⌈ln(2)·⌊m/n⌋⌉` (see [`crate::params`]).
//!
//! # Examples
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 0.01).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.contains("hello"));
//! assert!(filter.contains("world"));
//! assert!(!filter.contains("goodbye"));
//! assert_eq!(filter.count(), 2);
//! ```
//!
//! # Concurrency
//!
//! Not thread-safe: mutation takes `&mut self` and the bit array is plain
//! memory, not atomics. For concurrent use, guard each filter with a mutex
//! or keep one filter per thread and merge with [`BloomFilter::union_with`]
//! afterwards.

use crate::bitset::BitArray;
use crate::error::{BloomsetError, Result};
use crate::hash::{self, BloomHasher, Xxh3Hasher};
use crate::params::{self, DEFAULT_CAPACITY, DEFAULT_PROBABILITY};
use std::fmt::Display;

/// A classic (non-counting) Bloom filter.
///
/// Elements of any displayable type can be inserted; each value is
/// canonicalized through its `Display` form before hashing, so `add` and
/// [`contains`](Self::contains) agree on what "the same value" means, and a
/// single filter can hold mixed types (`42u32` and `"42"` are the same
/// element).
///
/// # Type Parameters
///
/// * `H` - Base hash function ([`Xxh3Hasher`] by default). Filters with
///   different hasher types cannot be combined — the compatibility of the
///   digest is enforced by the type system, leaving only the parameter
///   check at runtime.
///
/// # Invariants
///
/// - `bit_size` and `hash_count` are fixed at construction.
/// - `count` increments by exactly 1 per [`add`](Self::add) call that flips
///   at least one bit; it is an approximate "elements added" figure, not an
///   exact cardinality.
#[derive(Debug, Clone)]
pub struct BloomFilter<H = Xxh3Hasher>
where
    H: BloomHasher + Clone,
{
    /// The m-bit array.
    bits: BitArray,

    /// Expected number of distinct elements; part of the compatibility key.
    capacity: usize,

    /// Target false-positive rate; part of the compatibility key.
    probability: f64,

    /// Number of hash slots (k) derived per element.
    k: usize,

    /// Elements recorded as newly inserted.
    count: usize,

    /// Base hash function.
    hasher: H,
}

impl BloomFilter<Xxh3Hasher> {
    /// Create a filter tuned for `capacity` elements at the target
    /// false-positive `probability`, using the default hasher.
    ///
    /// # Errors
    ///
    /// - [`BloomsetError::InvalidCapacity`] if `capacity == 0`
    /// - [`BloomsetError::ProbabilityOutOfBounds`] if `probability` is not
    ///   in (0, 1)
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::BloomFilter;
    ///
    /// let filter = BloomFilter::new(100, 0.01).unwrap();
    /// assert_eq!(filter.bit_size(), 959);
    /// assert_eq!(filter.hash_count(), 7);
    /// ```
    pub fn new(capacity: usize, probability: f64) -> Result<Self> {
        Self::with_hasher(capacity, probability, Xxh3Hasher::new())
    }
}

impl Default for BloomFilter<Xxh3Hasher> {
    /// A filter with the reference defaults: capacity 100, probability 1%.
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_PROBABILITY)
            .expect("default filter parameters are valid")
    }
}

impl<H> BloomFilter<H>
where
    H: BloomHasher + Clone,
{
    /// Create a filter with a custom base hasher.
    ///
    /// Two filters only produce identical bit patterns (and therefore
    /// meaningful unions/intersections) when their hashers match.
    ///
    /// # Errors
    ///
    /// Same as [`BloomFilter::new`].
    pub fn with_hasher(capacity: usize, probability: f64, hasher: H) -> Result<Self> {
        let m = params::bit_count(capacity, probability)?;
        let k = params::hash_count(m, capacity);

        Ok(Self {
            bits: BitArray::new(m),
            capacity,
            probability,
            k,
            count: 0,
            hasher,
        })
    }

    /// Insert a value and return it, so calls can be chained.
    ///
    /// All `k` positions are set unconditionally (no short-circuit once one
    /// is found set); `count` increments iff the call changed at least one
    /// bit, so re-adding a value the filter already reflects leaves `count`
    /// alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::BloomFilter;
    ///
    /// let mut filter = BloomFilter::default();
    /// let token = filter.add("session-42");
    /// assert_eq!(token, "session-42");
    /// assert_eq!(filter.count(), 1);
    ///
    /// filter.add("session-42");
    /// assert_eq!(filter.count(), 1);
    /// ```
    pub fn add<V: Display>(&mut self, value: V) -> V {
        let x = self.base_hash(&value);
        let mut changed = false;
        for position in hash::positions(x, self.k, self.bits.len()) {
            if !self.bits.get(position) {
                changed = true;
            }
            self.bits.set(position);
        }
        if changed {
            self.count += 1;
        }
        value
    }

    /// Test whether a value might be in the set.
    ///
    /// Returns `true` iff all `k` derived positions are set: a `false` is
    /// definitive, a `true` is correct up to the configured false-positive
    /// probability. Values previously [`add`](Self::add)ed always report
    /// `true` (unless their bits were cleared through
    /// [`clear_bit`](Self::clear_bit)).
    #[must_use]
    pub fn contains<V: Display + ?Sized>(&self, value: &V) -> bool {
        let x = self.base_hash(value);
        hash::positions(x, self.k, self.bits.len())
            .iter()
            .all(|&position| self.bits.get(position))
    }

    /// Alias for [`contains`](Self::contains).
    #[must_use]
    #[inline]
    pub fn includes<V: Display + ?Sized>(&self, value: &V) -> bool {
        self.contains(value)
    }

    /// Read the bit at `position`.
    ///
    /// # Errors
    ///
    /// [`BloomsetError::OutOfRange`] if `position >= bit_size()`.
    pub fn get_bit(&self, position: usize) -> Result<bool> {
        self.check_position(position)?;
        Ok(self.bits.get(position))
    }

    /// Set the bit at `position` to true.
    ///
    /// Raw access, independent of [`add`](Self::add): useful for manual bit
    /// manipulation and testing. Does not touch `count`.
    ///
    /// # Errors
    ///
    /// [`BloomsetError::OutOfRange`] if `position >= bit_size()`; the
    /// filter is unchanged on error.
    pub fn set_bit(&mut self, position: usize) -> Result<()> {
        self.check_position(position)?;
        self.bits.set(position);
        Ok(())
    }

    /// Set the bit at `position` to false.
    ///
    /// Clearing bits can introduce false negatives for previously added
    /// values; the no-false-negative guarantee assumes bits are never
    /// cleared externally.
    ///
    /// # Errors
    ///
    /// [`BloomsetError::OutOfRange`] if `position >= bit_size()`; the
    /// filter is unchanged on error.
    pub fn clear_bit(&mut self, position: usize) -> Result<()> {
        self.check_position(position)?;
        self.bits.clear(position);
        Ok(())
    }

    /// OR another filter's bits into this one, in place.
    ///
    /// Afterwards this filter reports `true` for every value either filter
    /// reported `true` for. The other filter is never mutated. `count` is
    /// deliberately left untouched: after a merge it no longer tracks the
    /// bit array's content and callers must not rely on it for exactness.
    ///
    /// # Errors
    ///
    /// [`BloomsetError::IncompatibleFilters`] if the operand's capacity or
    /// probability differs; raised before any bit is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bloomset::BloomFilter;
    ///
    /// let mut a = BloomFilter::new(10, 0.1).unwrap();
    /// let mut b = BloomFilter::new(10, 0.1).unwrap();
    /// a.add("Kolyan");
    /// b.add("Vovan");
    ///
    /// a.union_with(&b).unwrap();
    ///
    /// assert!(a.contains("Kolyan"));
    /// assert!(a.contains("Vovan"));
    /// assert!(!b.contains("Kolyan"));
    /// ```
    pub fn union_with(&mut self, other: &Self) -> Result<()> {
        self.ensure_compatible(other)?;
        self.bits.union_with(&other.bits);
        Ok(())
    }

    /// AND another filter's bits into this one, in place.
    ///
    /// Afterwards this filter only reports `true` for values both filters
    /// reported `true` for. The other filter is never mutated, and `count`
    /// is left untouched (see [`union_with`](Self::union_with)).
    ///
    /// # Errors
    ///
    /// [`BloomsetError::IncompatibleFilters`] if the operand's capacity or
    /// probability differs; raised before any bit is touched.
    pub fn intersect_with(&mut self, other: &Self) -> Result<()> {
        self.ensure_compatible(other)?;
        self.bits.intersect_with(&other.bits);
        Ok(())
    }

    /// Expected number of distinct elements this filter was tuned for.
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Target false-positive rate this filter was tuned for.
    #[must_use]
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Number of elements recorded as newly inserted.
    ///
    /// Approximate: hash collisions can undercount, and merges do not
    /// adjust it.
    #[must_use]
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Length of the bit array (m).
    #[must_use]
    #[inline]
    pub fn bit_size(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash functions derived per element (k).
    #[must_use]
    #[inline]
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Number of bits currently set.
    #[must_use]
    pub fn count_set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, in [0, 1].
    #[must_use]
    pub fn fill_rate(&self) -> f64 {
        self.count_set_bits() as f64 / self.bit_size() as f64
    }

    /// Whether no bits are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count_set_bits() == 0
    }

    /// Hash a value's canonical (`Display`) form to its 128-bit base hash.
    fn base_hash<V: Display + ?Sized>(&self, value: &V) -> u128 {
        self.hasher.hash_bytes(value.to_string().as_bytes())
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.bits.len() {
            return Err(BloomsetError::out_of_range(position, self.bits.len()));
        }
        Ok(())
    }

    /// Filters combine only when built from identical parameters; exact
    /// float comparison is intended, approximate equality is not.
    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.capacity != other.capacity {
            return Err(BloomsetError::incompatible_filters(format!(
                "capacity mismatch: {} vs {}",
                self.capacity, other.capacity
            )));
        }
        if self.probability != other.probability {
            return Err(BloomsetError::incompatible_filters(format!(
                "probability mismatch: {} vs {}",
                self.probability, other.probability
            )));
        }
        Ok(())
    }
}
