//! Filter configuration module.
//!
//! This module defines the file/environment facing settings for the cuckoo
//! filter and turns them into a ready-to-use filter.

use super::{ConfigResult, Validate};
use crate::data_structures::manu_cuckoo_filter::{
    HashAlgorithm, ManuCuckooFilter, ManuCuckooFilterConfig, RngSlotChooser,
    DEFAULT_CAPACITY, DEFAULT_MAX_NUM_KICKS,
};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Upper bound on the kick budget accepted from configuration.
pub const MAX_KICKS_LIMIT: u32 = 1 << 20;

/// Filter type built from [`FilterSettings`].
pub type ConfiguredFilter = ManuCuckooFilter<HashAlgorithm, RngSlotChooser>;

/// Cuckoo filter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterSettings {
    /// Requested capacity in fingerprints, rounded up to a power of two
    pub capacity: u32,

    /// Maximum relocation kicks per insert
    pub max_num_kicks: u32,

    /// Item hash function
    pub hash: HashAlgorithm,

    /// Seed for the relocation slot chooser (None for OS entropy)
    pub seed: Option<u64>,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_num_kicks: DEFAULT_MAX_NUM_KICKS,
            hash: HashAlgorithm::default(),
            seed: None,
        }
    }
}

impl Validate for FilterSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_num_kicks > MAX_KICKS_LIMIT {
            return Err(ConfigError::ValueOutOfRange {
                key: "filter.max_num_kicks".to_string(),
                message: format!("must be at most {MAX_KICKS_LIMIT}, got {}", self.max_num_kicks),
            });
        }
        Ok(())
    }
}

impl FilterSettings {
    /// Data-structure configuration matching these settings.
    pub fn to_filter_config(&self) -> ManuCuckooFilterConfig {
        ManuCuckooFilterConfig::new()
            .with_capacity(self.capacity)
            .with_max_num_kicks(self.max_num_kicks)
    }

    /// Build an empty filter from these settings.
    pub fn build_filter(&self) -> ConfiguredFilter {
        let chooser = match self.seed {
            Some(seed) => RngSlotChooser::seeded(seed),
            None => RngSlotChooser::from_entropy(),
        };
        ManuCuckooFilter::with_parts(self.to_filter_config(), self.hash, chooser)
    }
}
