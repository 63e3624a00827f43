// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Manu Cuckoo Filter.

/// Errors that can occur in Manu Cuckoo Filter operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ManuCuckooFilterError {
    /// Relocation ran out of kicks; the item was not admitted.
    ///
    /// Every previously stored fingerprint is still in the table. The only
    /// remedies are building a larger filter or accepting the miss.
    #[error("Cuckoo filter is considered full (max kicks: {max_kicks}, count: {count})")]
    FilterFull {
        /// Kick budget that was exhausted
        max_kicks: u32,
        /// Number of stored fingerprints when the insert gave up
        count: usize,
    },
}

/// Result type for Manu Cuckoo Filter operations
pub type Result<T> = std::result::Result<T, ManuCuckooFilterError>;
