//! Worker configuration loaded from environment variables
//!
//! This module provides configuration management for the Resonance worker service.
//! Configuration is loaded from environment variables with sensible defaults for
//! development environments.

use anyhow::{Context, Result};
use resonance_shared_config::{CommonConfig, Environment, PopularitySyncConfig, RadioConfig};

/// Worker configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Common configuration shared with other services
    pub common: CommonConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let common = CommonConfig::from_env().context("Failed to load worker config")?;
        Ok(Self { common })
    }

    /// Load a `.env` file if present, then read the environment
    pub fn load() -> Result<Self> {
        let common = CommonConfig::load().context("Failed to load worker config")?;
        Ok(Self { common })
    }

    /// Get radio selection limits
    pub fn radio(&self) -> &RadioConfig {
        &self.common.radio
    }

    /// Get popularity sync pacing
    pub fn popularity_sync(&self) -> &PopularitySyncConfig {
        &self.common.popularity_sync
    }

    /// Get environment mode
    pub fn environment(&self) -> Environment {
        self.common.environment
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.common.environment.is_production()
    }

    pub fn log_level(&self) -> &str {
        &self.common.log_level
    }
}
