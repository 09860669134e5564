//! Library radio configuration types

use crate::{parse_env, ConfigError, ConfigResult};

/// Default number of candidate songs considered per radio request
const DEFAULT_POOL_SIZE: usize = 2000;

/// Default number of songs returned when the caller does not ask for a count
const DEFAULT_COUNT: usize = 50;

/// Default upper bound for a single radio request
const DEFAULT_MAX_COUNT: usize = 500;

/// Library radio selection limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioConfig {
    /// Maximum number of candidates fetched for weighting
    pub pool_size: usize,

    /// Number of songs returned when no count is requested
    pub default_count: usize,

    /// Requested counts above this value are clamped
    pub max_count: usize,
}

impl RadioConfig {
    /// Load radio configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        let config = Self {
            pool_size: parse_env("RADIO_POOL_SIZE", DEFAULT_POOL_SIZE)?,
            default_count: parse_env("RADIO_DEFAULT_COUNT", DEFAULT_COUNT)?,
            max_count: parse_env("RADIO_MAX_COUNT", DEFAULT_MAX_COUNT)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the limits are usable together
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pool_size == 0 {
            return Err(ConfigError::InvalidValue(
                "RADIO_POOL_SIZE".to_string(),
                "pool size must be greater than zero".to_string(),
            ));
        }

        if self.default_count > self.max_count {
            return Err(ConfigError::ValidationError(format!(
                "RADIO_DEFAULT_COUNT ({}) exceeds RADIO_MAX_COUNT ({})",
                self.default_count, self.max_count
            )));
        }

        Ok(())
    }

    /// Resolve a caller-supplied count against the configured limits
    pub fn clamp_count(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_count)
            .min(self.max_count)
    }
}

impl Default for RadioConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            default_count: DEFAULT_COUNT,
            max_count: DEFAULT_MAX_COUNT,
        }
    }
}
