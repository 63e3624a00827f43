//! Manu Filter Library
//!
//! This library contains a cuckoo filter for approximate set membership
//! with deletion support, plus the configuration and error plumbing used by
//! the `manu_filter` command-line tool. The library is designed to be used by
//! the binary crate, but can also be embedded by storage, search and caching
//! engines that want to skip lookups for keys that are definitely absent.
//!
//! # Architecture
//!
//! The crate is designed with the following principles in mind:
//! - Strict component boundaries
//! - Dependency injection for testability (hash function, randomness)
//! - Fixed, construction-time memory footprint
//! - Comprehensive error handling and propagation

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for the Manu filter crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
