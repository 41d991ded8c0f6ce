use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::exception::ConfigError;

/** Number of buckets a fresh table starts with. Prime. */
pub const DEFAULT_INITIAL_CAPACITY: usize = 7;

/** A table grows once it would hold more than `limit * threshold` entries. */
pub const DEFAULT_LOAD_FACTOR_THRESHOLD: f64 = 0.75;

/** On growth the new limit is the next prime at or above `limit * multiplier`. */
pub const DEFAULT_GROWTH_MULTIPLIER: usize = 2;

/** Largest accepted `initial_capacity`. */
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;

/** Smallest accepted `load_factor_threshold`. */
pub const MIN_LOAD_FACTOR_THRESHOLD: f64 = 0.01;

/** Largest accepted `growth_multiplier`. */
pub const MAX_GROWTH_MULTIPLIER: usize = 16;

/** A table stops growing once the next limit would exceed this many buckets. */
pub const MAX_CAPACITY: usize = 1 << 30;

/// Tuning knobs for a [`ChainedHashTable`](crate::container::ChainedHashTable).
///
/// Every field has a default, so a TOML file only needs the keys it changes:
///
/// ```toml
/// initial_capacity = 11
/// load_factor_threshold = 0.5
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashTableConfig {
    pub initial_capacity: usize,
    pub load_factor_threshold: f64,
    pub growth_multiplier: usize,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor_threshold: DEFAULT_LOAD_FACTOR_THRESHOLD,
            growth_multiplier: DEFAULT_GROWTH_MULTIPLIER,
        }
    }
}

impl HashTableConfig {
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_load_factor_threshold(mut self, load_factor_threshold: f64) -> Self {
        self.load_factor_threshold = load_factor_threshold;
        self
    }

    pub fn with_growth_multiplier(mut self, growth_multiplier: usize) -> Self {
        self.growth_multiplier = growth_multiplier;
        self
    }

    /// Parses and validates a config from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: HashTableConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks the knobs against the limits the table relies on.
    ///
    /// A non-prime `initial_capacity` is accepted here; the table rounds it
    /// up to the next prime when it is built. The upper bounds keep
    /// `initial_capacity * growth_multiplier` well below [`MAX_CAPACITY`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity < 2 {
            return Err(ConfigError::InvalidCapacity(self.initial_capacity));
        }
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(ConfigError::CapacityTooLarge(self.initial_capacity));
        }
        if !self.load_factor_threshold.is_finite()
            || self.load_factor_threshold < MIN_LOAD_FACTOR_THRESHOLD
        {
            return Err(ConfigError::InvalidLoadFactor(self.load_factor_threshold));
        }
        if self.growth_multiplier < 2 {
            return Err(ConfigError::InvalidGrowthMultiplier(self.growth_multiplier));
        }
        if self.growth_multiplier > MAX_GROWTH_MULTIPLIER {
            return Err(ConfigError::GrowthMultiplierTooLarge(self.growth_multiplier));
        }
        Ok(())
    }

    pub(crate) fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
