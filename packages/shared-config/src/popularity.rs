//! Popularity sync configuration types

use std::time::Duration;

use crate::{parse_env, ConfigResult};

/// Delay between enrichment requests, in milliseconds
const DEFAULT_REQUEST_DELAY_MS: u64 = 200;

/// Pacing for the background popularity sync
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularitySyncConfig {
    /// Fixed pause after each processed entity, to avoid hammering the
    /// enrichment source
    pub request_delay_ms: u64,
}

impl PopularitySyncConfig {
    /// Load popularity sync configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            request_delay_ms: parse_env("POPULARITY_SYNC_DELAY_MS", DEFAULT_REQUEST_DELAY_MS)?,
        })
    }

    /// Create a configuration with a custom delay (useful for testing)
    pub fn with_delay_ms(request_delay_ms: u64) -> Self {
        Self { request_delay_ms }
    }

    /// Delay between enrichment requests
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

impl Default for PopularitySyncConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
        }
    }
}
