//! Configuration for ChainKV
//!
//! Centralized configuration with sensible defaults.

use crate::error::{ChainError, Result};

/// Default number of bucket slots in a fresh table
pub const DEFAULT_INITIAL_CAPACITY: usize = 128;

/// Default fill ratio that triggers a capacity doubling
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Main configuration for a ChainKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Table Configuration
    // -------------------------------------------------------------------------
    /// Number of bucket slots allocated at open. Must be positive.
    /// Capacity only ever grows from here (doubling), never shrinks.
    pub initial_capacity: usize,

    /// Fill ratio (`live entries / capacity`) above which the table doubles.
    /// Must lie in the open interval (0, 1).
    pub load_factor: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(ChainError::Config(
                "initial_capacity must be positive".to_string(),
            ));
        }
        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(ChainError::Config(format!(
                "load_factor must be in (0, 1), got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the initial bucket-slot count
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.config.initial_capacity = capacity;
        self
    }

    /// Set the fill ratio that triggers growth
    pub fn load_factor(mut self, load_factor: f64) -> Self {
        self.config.load_factor = load_factor;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
