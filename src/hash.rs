//! Hashing and bit-position derivation.
//!
//! Deriving `k` bit positions per element is split in two, so each
//! operation pays for one digest rather than `k`:
//!
//! 1. A [`BloomHasher`] maps the element's canonical byte form to one
//!    128-bit base hash `x`.
//! 2. A fixed linear family spreads `x` over the bit array: slot `i` uses
//!    parameters `a = 2i+1`, `b = 2i+2` and lands on
//!    `((a·x + b) mod P) mod m`, with `P` = [`POSITION_PRIME`].
//!
//! The family is fixed (no per-filter seed), so two filters built with the
//! same parameters map every value to the same positions — the property the
//! set-algebra operations depend on.
//!
//! # Examples
//!
//! ```
//! use bloomset::hash::{positions, BloomHasher, Xxh3Hasher};
//!
//! let hasher = Xxh3Hasher::new();
//! let x = hasher.hash_bytes(b"hello");
//!
//! let slots = positions(x, 7, 959);
//! assert_eq!(slots.len(), 7);
//! assert!(slots.iter().all(|&p| p < 959));
//! ```
//!
//! # References
//!
//! - Kirsch & Mitzenmacher (2006): "Less Hashing, Same Performance:
//!   Building a Better Bloom Filter"

use xxhash_rust::xxh3::xxh3_128_with_seed;

/// Modulus of the linear position family: a fixed prime comfortably larger
/// than any bit-array length this crate produces.
pub const POSITION_PRIME: u64 = 100_000_000_003;

/// Base hasher for filter elements.
///
/// Implementations map arbitrary bytes to a 128-bit value and must be:
///
/// - **Deterministic**: same input, same output, for the process lifetime
/// - **Well-distributed**: output spread uniformly across the `u128` space
///
/// Cryptographic strength is not required; the digest only feeds the
/// position family, never an adversary-facing boundary.
pub trait BloomHasher: Send + Sync {
    /// Hash arbitrary bytes to a 128-bit base value.
    fn hash_bytes(&self, bytes: &[u8]) -> u128;

    /// Human-readable name for debugging.
    fn name(&self) -> &'static str;
}

/// Default hasher backed by xxHash3-128.
///
/// Fast, non-cryptographic, and seedable; the default seed is a compile-time
/// constant so hashes are stable across runs of the same build.
///
/// # Examples
///
/// ```
/// use bloomset::hash::{BloomHasher, Xxh3Hasher};
///
/// let hasher = Xxh3Hasher::new();
/// assert_eq!(hasher.hash_bytes(b"a"), hasher.hash_bytes(b"a"));
/// assert_ne!(hasher.hash_bytes(b"a"), hasher.hash_bytes(b"b"));
/// ```
#[derive(Debug, Clone)]
pub struct Xxh3Hasher {
    seed: u64,
}

impl Xxh3Hasher {
    /// Create a hasher with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: 0x9e37_79b9_7f4a_7c15,
        }
    }

    /// Create a hasher with an explicit seed.
    ///
    /// Filters only interoperate (identical bit patterns, valid set
    /// algebra) when they hash with the same seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for Xxh3Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomHasher for Xxh3Hasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u128 {
        xxh3_128_with_seed(bytes, self.seed)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "Xxh3Hasher"
    }
}

/// Linear-family parameters for hash slot `i`: `(a, b) = (2i+1, 2i+2)`.
#[must_use]
#[inline]
pub const fn slot_params(i: usize) -> (u64, u64) {
    ((2 * i + 1) as u64, (2 * i + 2) as u64)
}

/// Map a base hash to a bit position: `((a·x + b) mod P) mod m`.
///
/// `(a·x + b) mod P == (a·(x mod P) + b) mod P`, so `x` is reduced first;
/// the remaining product stays far inside `u128` for any 128-bit digest.
#[must_use]
#[inline]
pub fn bit_position(a: u64, b: u64, x: u128, m: usize) -> usize {
    let prime = u128::from(POSITION_PRIME);
    let x_mod = x % prime;
    let position = (u128::from(a) * x_mod + u128::from(b)) % prime;
    (position % m as u128) as usize
}

/// Derive all `k` bit positions for base hash `x` in a filter of `m` bits.
#[must_use]
pub fn positions(x: u128, k: usize, m: usize) -> Vec<usize> {
    let mut out = Vec::with_capacity(k);
    for i in 0..k {
        let (a, b) = slot_params(i);
        out.push(bit_position(a, b, x, m));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hasher_is_deterministic() {
        let hasher = Xxh3Hasher::new();
        assert_eq!(hasher.hash_bytes(b"test"), hasher.hash_bytes(b"test"));
    }

    #[test]
    fn test_hasher_distinguishes_inputs() {
        let hasher = Xxh3Hasher::new();
        assert_ne!(hasher.hash_bytes(b"input1"), hasher.hash_bytes(b"input2"));
    }

    #[test]
    fn test_hasher_empty_input() {
        let hasher = Xxh3Hasher::new();
        assert_eq!(hasher.hash_bytes(b""), hasher.hash_bytes(b""));
    }

    #[test]
    fn test_different_seeds_differ() {
        let h1 = Xxh3Hasher::with_seed(1);
        let h2 = Xxh3Hasher::with_seed(2);
        assert_ne!(h1.hash_bytes(b"test"), h2.hash_bytes(b"test"));
    }

    #[test]
    fn test_same_seed_matches() {
        let h1 = Xxh3Hasher::with_seed(42);
        let h2 = Xxh3Hasher::with_seed(42);
        assert_eq!(h1.hash_bytes(b"test"), h2.hash_bytes(b"test"));
    }

    #[test]
    fn test_hasher_name() {
        assert_eq!(Xxh3Hasher::new().name(), "Xxh3Hasher");
    }

    #[test]
    fn test_slot_params_sequence() {
        assert_eq!(slot_params(0), (1, 2));
        assert_eq!(slot_params(1), (3, 4));
        assert_eq!(slot_params(2), (5, 6));
        assert_eq!(slot_params(6), (13, 14));
    }

    #[test]
    fn test_bit_position_in_range() {
        let hasher = Xxh3Hasher::new();
        for value in ["a", "b", "hello", "world", ""] {
            let x = hasher.hash_bytes(value.as_bytes());
            for i in 0..10 {
                let (a, b) = slot_params(i);
                assert!(bit_position(a, b, x, 959) < 959);
            }
        }
    }

    #[test]
    fn test_bit_position_matches_unreduced_formula() {
        // For x small enough that a·x fits in u128, the reduced computation
        // must agree with the textbook ((a·x + b) mod P) mod m.
        let prime = u128::from(POSITION_PRIME);
        for x in [0u128, 1, 12_345, 1 << 64, (1 << 100) + 17] {
            for i in 0..8 {
                let (a, b) = slot_params(i);
                let direct = (((u128::from(a) * x + u128::from(b)) % prime) % 959) as usize;
                assert_eq!(bit_position(a, b, x, 959), direct);
            }
        }
    }

    #[test]
    fn test_positions_count_and_range() {
        let x = Xxh3Hasher::new().hash_bytes(b"value");
        let slots = positions(x, 7, 959);
        assert_eq!(slots.len(), 7);
        assert!(slots.iter().all(|&p| p < 959));
    }

    #[test]
    fn test_positions_deterministic() {
        let x = Xxh3Hasher::new().hash_bytes(b"value");
        assert_eq!(positions(x, 7, 959), positions(x, 7, 959));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Xxh3Hasher>();
    }
}
