//! Configuration for the tangle core

use serde::{Deserialize, Serialize};

use crate::validator::EPOCH_FLOOR;

/// Tangle configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Validation configuration
    pub validation: ValidationConfig,

    /// Solidity walk configuration
    pub solidity: SolidityConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            solidity: SolidityConfig::default(),
        }
    }
}

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Minimum trailing zero trits required of a transaction hash
    pub min_weight_magnitude: usize,

    /// Lowest acceptable issuance timestamp, seconds
    pub epoch_floor: i64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_weight_magnitude: 14,
            epoch_floor: EPOCH_FLOOR,
        }
    }
}

/// Solidity walk configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolidityConfig {
    /// Initial worklist capacity for the discovery phase
    pub worklist_capacity: usize,
}

impl Default for SolidityConfig {
    fn default() -> Self {
        Self {
            worklist_capacity: 1024,
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(mwm) = std::env::var("TANGLE_MIN_WEIGHT_MAGNITUDE") {
            config.validation.min_weight_magnitude = mwm
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid TANGLE_MIN_WEIGHT_MAGNITUDE: {}", mwm)))?;
        }

        if let Ok(floor) = std::env::var("TANGLE_EPOCH_FLOOR") {
            config.validation.epoch_floor = floor
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid TANGLE_EPOCH_FLOOR: {}", floor)))?;
        }

        if let Ok(capacity) = std::env::var("TANGLE_WORKLIST_CAPACITY") {
            config.solidity.worklist_capacity = capacity
                .parse()
                .map_err(|_| crate::Error::Config(format!("Invalid TANGLE_WORKLIST_CAPACITY: {}", capacity)))?;
        }

        Ok(config)
    }
}
