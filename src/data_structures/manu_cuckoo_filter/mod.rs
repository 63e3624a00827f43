// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Manu Cuckoo Filter for approximate membership with deletes.
//!
//! A compact probabilistic set that answers "possibly present" or
//! "definitely absent" for byte-string keys. Unlike a Bloom filter it
//! supports removing items, and its memory is bounded by a bucket table
//! whose size is fixed at construction.
//!
//! # Features
//!
//! - Partial-key cuckoo hashing with 8-bit fingerprints and 4-slot buckets.
//! - Bounded insert cost: at most `max_num_kicks + 2` bucket probes.
//! - Pluggable 32-bit hash (FNV-1a by default) and injectable slot chooser
//!   for reproducible relocation.
//! - A failed insert never drops a previously stored fingerprint.
//! - Zero unsafe code.
//!
//! # Example
//!
//! ```
//! use manu_filter_lib::data_structures::manu_cuckoo_filter::{
//!     ManuCuckooFilter, ManuCuckooFilterConfig,
//! };
//!
//! let config = ManuCuckooFilterConfig::new()
//!     .with_capacity(1 << 16)
//!     .with_max_num_kicks(256);
//! let mut filter = ManuCuckooFilter::with_config(config);
//!
//! filter.insert(b"user:42").unwrap();
//! assert!(filter.lookup(b"user:42"));
//! assert!(filter.delete(b"user:42"));
//! assert!(filter.is_empty());
//! ```
//!
//! # Skipping Expensive Lookups
//!
//! The filter sits in front of a slower store. A negative answer is always
//! correct, so the store only has to be consulted on a positive:
//!
//! ```
//! use std::collections::HashMap;
//! use manu_filter_lib::data_structures::manu_cuckoo_filter::ManuCuckooFilter;
//!
//! struct GuardedStore {
//!     filter: ManuCuckooFilter,
//!     store: HashMap<Vec<u8>, String>,
//! }
//!
//! impl GuardedStore {
//!     fn get(&self, key: &[u8]) -> Option<&String> {
//!         if !self.filter.lookup(key) {
//!             return None;
//!         }
//!         self.store.get(key)
//!     }
//! }
//!
//! let mut guarded = GuardedStore {
//!     filter: ManuCuckooFilter::new(1024),
//!     store: HashMap::new(),
//! };
//! guarded.filter.insert(b"k").unwrap();
//! guarded.store.insert(b"k".to_vec(), "v".to_string());
//! assert_eq!(guarded.get(b"k").map(String::as_str), Some("v"));
//! ```
//!
//! # Reproducible Relocation
//!
//! ```
//! use manu_filter_lib::data_structures::manu_cuckoo_filter::{
//!     Fnv1a32, ManuCuckooFilter, ManuCuckooFilterConfig, RngSlotChooser,
//! };
//!
//! let config = ManuCuckooFilterConfig::new().with_capacity(64);
//! let mut filter = ManuCuckooFilter::with_parts(config, Fnv1a32, RngSlotChooser::seeded(7));
//! assert!(filter.insert(b"deterministic").is_ok());
//! ```

// Module declarations
mod bucket;
mod config;
mod error;
mod filter;
mod hash;

// Re-exports
pub use bucket::{Bucket, Fingerprint, BUCKET_SIZE, EMPTY_SLOT};
pub use config::{ManuCuckooFilterConfig, DEFAULT_CAPACITY, DEFAULT_MAX_NUM_KICKS};
pub use error::{ManuCuckooFilterError, Result};
pub use filter::ManuCuckooFilter;
pub use hash::{
    fingerprint, Fnv1a32, Fnv1a64Folded, HashAlgorithm, HashFunction, RngSlotChooser,
    SlotChooser,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut filter = ManuCuckooFilter::new(1 << 16);

        filter.insert(b"hello").unwrap();
        filter.insert(b"world").unwrap();

        assert!(filter.lookup(b"hello"));
        assert!(filter.lookup(b"world"));
        assert_eq!(filter.count(), 2);
    }

    #[test]
    fn test_custom_configuration() {
        let config = ManuCuckooFilterConfig::new()
            .with_capacity(1_000)
            .with_max_num_kicks(32);

        let mut filter = ManuCuckooFilter::with_parts(config, Fnv1a64Folded, RngSlotChooser::seeded(1));

        filter.insert(b"test-config").unwrap();
        assert!(filter.lookup(b"test-config"));
        assert_eq!(filter.config().max_num_kicks(), 32);
        assert_eq!(filter.bucket_count(), 256);
    }
}
