//! Bloomset: a classic Bloom filter for Rust.
//!
//! A Bloom filter is a space-efficient probabilistic data structure that
//! tests whether an element is a member of a set. It can produce:
//! - **False positives**: may report an element is in the set when it isn't
//! - **Zero false negatives**: if it says an element isn't in the set, it
//!   definitely isn't
//!
//! # Quick Start
//!
//! ```
//! use bloomset::BloomFilter;
//!
//! // Tuned for 10,000 elements at a 1% false-positive rate
//! let mut filter = BloomFilter::new(10_000, 0.01).unwrap();
//!
//! filter.add("hello");
//! filter.add("world");
//!
//! assert!(filter.contains("hello"));    // true - definitely added
//! assert!(!filter.contains("goodbye")); // false - definitely not in set
//! ```
//!
//! # What the Filter Provides
//!
//! - Sizing from `(capacity, probability)` using the classic formulas, with
//!   both parameters defaulting to the reference values (100, 1%) via
//!   [`BloomFilter::default`] or [`FilterBuilder`]
//! - Insert ([`BloomFilter::add`]) and membership query
//!   ([`BloomFilter::contains`] / [`BloomFilter::includes`]) over any
//!   displayable value
//! - Raw bit access ([`BloomFilter::get_bit`], [`BloomFilter::set_bit`],
//!   [`BloomFilter::clear_bit`]) with range-checked positions
//! - In-place set algebra ([`BloomFilter::union_with`],
//!   [`BloomFilter::intersect_with`]) across filters built with identical
//!   parameters
//!
//! # Concurrency
//!
//! Filters are single-threaded by design: mutation takes `&mut self` and no
//! internal locking exists. Share a filter across threads behind a
//! `Mutex`, or build one filter per thread and merge them with
//! [`BloomFilter::union_with`] afterwards.
//!
//! ```
//! use bloomset::BloomFilter;
//! use std::sync::{Arc, Mutex};
//!
//! let filter = Arc::new(Mutex::new(BloomFilter::new(10_000, 0.01).unwrap()));
//!
//! let handle = {
//!     let filter = Arc::clone(&filter);
//!     std::thread::spawn(move || {
//!         filter.lock().unwrap().add("from-worker");
//!     })
//! };
//! handle.join().unwrap();
//!
//! assert!(filter.lock().unwrap().contains("from-worker"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![doc(html_root_url = "https://docs.rs/bloomset/0.1.0")]

/// Packed bit storage.
pub mod bitset;

/// Defaulted filter construction.
pub mod builder;

/// Error types and result alias.
pub mod error;

/// The filter itself.
pub mod filter;

/// Hashing and bit-position derivation.
pub mod hash;

/// Sizing formulas.
pub mod params;

// Re-export the working set at the crate root.
pub use builder::FilterBuilder;
pub use error::{BloomsetError, Result};
pub use filter::BloomFilter;
pub use hash::{BloomHasher, Xxh3Hasher};

/// Prelude module for convenient imports.
///
/// ```
/// use bloomset::prelude::*;
///
/// let mut filter = BloomFilter::default();
/// filter.add("hello");
/// assert!(filter.contains("hello"));
/// ```
pub mod prelude {
    pub use crate::builder::FilterBuilder;
    pub use crate::error::{BloomsetError, Result};
    pub use crate::filter::BloomFilter;
    pub use crate::hash::{BloomHasher, Xxh3Hasher};
}
