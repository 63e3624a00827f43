// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Manu Cuckoo Filter.

use crate::data_structures::manu_cuckoo_filter::bucket::BUCKET_SIZE;

/// Default number of kicks attempted before an insert gives up.
pub const DEFAULT_MAX_NUM_KICKS: u32 = 512;

/// Default requested capacity, in fingerprints.
pub const DEFAULT_CAPACITY: u32 = 1 << 20;

/// Configuration for the Manu Cuckoo Filter.
///
/// The table size is fixed once the filter is built from this configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManuCuckooFilterConfig {
    /// Requested number of fingerprints the filter should hold.
    /// Advisory: it is rounded up to the next power of two before being
    /// divided into buckets.
    capacity: u32,

    /// Maximum number of evictions during an insert before reporting the
    /// filter as full.
    max_num_kicks: u32,
}

impl ManuCuckooFilterConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - capacity: 1,048,576
    /// - max_num_kicks: 512
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_num_kicks: DEFAULT_MAX_NUM_KICKS,
        }
    }

    /// Set the requested capacity.
    ///
    /// A capacity of zero is valid and yields a single bucket.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Set the kick budget for relocation.
    ///
    /// Larger budgets let the table fill further at the cost of slower
    /// inserts near capacity. Zero disables relocation entirely.
    pub fn with_max_num_kicks(mut self, max_num_kicks: u32) -> Self {
        self.max_num_kicks = max_num_kicks;
        self
    }

    /// Get the requested capacity
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Get the kick budget
    pub fn max_num_kicks(&self) -> u32 {
        self.max_num_kicks
    }

    /// Number of buckets the table will have.
    ///
    /// `max(1, next_power_of_two(capacity) / BUCKET_SIZE)`. Always a power of
    /// two so bucket selection can mask instead of taking a remainder.
    pub fn bucket_count(&self) -> usize {
        let rounded = u64::from(self.capacity).next_power_of_two();
        (rounded / BUCKET_SIZE as u64).max(1) as usize
    }

    /// Total fingerprint slots across all buckets.
    pub fn slot_capacity(&self) -> usize {
        self.bucket_count() * BUCKET_SIZE
    }
}

impl Default for ManuCuckooFilterConfig {
    fn default() -> Self {
        Self::new()
    }
}
