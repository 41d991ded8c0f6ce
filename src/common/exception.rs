use thiserror::Error;

use crate::common::config::{MAX_GROWTH_MULTIPLIER, MAX_INITIAL_CAPACITY, MIN_LOAD_FACTOR_THRESHOLD};

/// Rejections raised while building or loading a [`HashTableConfig`].
///
/// Table operations themselves never fail; duplicate keys and misses are
/// reported through `bool` / `Option` returns.
///
/// [`HashTableConfig`]: crate::common::config::HashTableConfig
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Initial capacity must be at least 2, got {0}")]
    InvalidCapacity(usize),
    #[error("Initial capacity must be at most {}, got {0}", MAX_INITIAL_CAPACITY)]
    CapacityTooLarge(usize),
    #[error("Load factor threshold must be finite and at least {}, got {0}", MIN_LOAD_FACTOR_THRESHOLD)]
    InvalidLoadFactor(f64),
    #[error("Growth multiplier must be at least 2, got {0}")]
    InvalidGrowthMultiplier(usize),
    #[error("Growth multiplier must be at most {}, got {0}", MAX_GROWTH_MULTIPLIER)]
    GrowthMultiplierTooLarge(usize),
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
