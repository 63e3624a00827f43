//! Data structures for the Manu filter crate.
//!
//! This module contains the probabilistic structures exposed by the crate.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Fixed memory footprint decided at construction
//! - No allocation on the lookup path

pub mod manu_cuckoo_filter;

// Re-export common data structures
pub use manu_cuckoo_filter::{ManuCuckooFilter, ManuCuckooFilterConfig, ManuCuckooFilterError};
