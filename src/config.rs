//! Core configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup by the embedding service and
//! validated before any component is wired up.
//!
//! ## Variables (all optional)
//!
//! - `CACHE_TTL_SECONDS` - Redirect cache entry lifetime (default: 300)
//! - `CACHE_CAPACITY` - Redirect cache soft capacity bound (default: 100)
//! - `STORE_TIMEOUT_MS` - Timeout for the resolve-and-increment round trip
//!   during redirects (default: 250)
//! - `ANALYTICS_TIMEOUT_MS` - Timeout for a single analytics sink write
//!   (default: 500)
//! - `CLICK_QUEUE_CAPACITY` - Click event buffer size (default: 10000,
//!   min: 100)

use std::env;
use std::time::Duration;

use anyhow::Result;

/// Core configuration with validated ranges.
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Redirect cache entry lifetime in seconds.
    pub cache_ttl_seconds: u64,
    /// Soft capacity bound of the redirect cache.
    pub cache_capacity: usize,
    /// Timeout for the store round trip on a redirect cache miss, in
    /// milliseconds. A slow backend degrades that request to not-found
    /// instead of stalling the redirect.
    pub store_timeout_ms: u64,
    /// Timeout for a single analytics sink write, in milliseconds.
    pub analytics_timeout_ms: u64,
    /// Bounded click channel capacity; events are dropped when full.
    pub click_queue_capacity: usize,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: 300,
            cache_capacity: 100,
            store_timeout_ms: 250,
            analytics_timeout_ms: 500,
            click_queue_capacity: 10_000,
        }
    }
}

impl CoreConfig {
    /// Loads configuration from environment variables, falling back to the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            cache_ttl_seconds: read_env("CACHE_TTL_SECONDS", defaults.cache_ttl_seconds),
            cache_capacity: read_env("CACHE_CAPACITY", defaults.cache_capacity),
            store_timeout_ms: read_env("STORE_TIMEOUT_MS", defaults.store_timeout_ms),
            analytics_timeout_ms: read_env("ANALYTICS_TIMEOUT_MS", defaults.analytics_timeout_ms),
            click_queue_capacity: read_env("CLICK_QUEUE_CAPACITY", defaults.click_queue_capacity),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when any value is outside its accepted range.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.cache_capacity == 0 {
            anyhow::bail!("CACHE_CAPACITY must be at least 1");
        }

        if self.store_timeout_ms == 0 || self.store_timeout_ms > 60_000 {
            anyhow::bail!(
                "STORE_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.store_timeout_ms
            );
        }

        if self.analytics_timeout_ms == 0 || self.analytics_timeout_ms > 60_000 {
            anyhow::bail!(
                "ANALYTICS_TIMEOUT_MS must be between 1 and 60000, got {}",
                self.analytics_timeout_ms
            );
        }

        if self.click_queue_capacity < 100 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY must be at least 100, got {}",
                self.click_queue_capacity
            );
        }

        if self.click_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "CLICK_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.click_queue_capacity
            );
        }

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }

    pub fn analytics_timeout(&self) -> Duration {
        Duration::from_millis(self.analytics_timeout_ms)
    }

    /// Logs a configuration summary at startup.
    pub fn print_summary(&self) {
        tracing::info!("Core configuration:");
        tracing::info!("  Cache TTL: {}s", self.cache_ttl_seconds);
        tracing::info!("  Cache capacity: {}", self.cache_capacity);
        tracing::info!("  Store timeout: {}ms", self.store_timeout_ms);
        tracing::info!("  Analytics timeout: {}ms", self.analytics_timeout_ms);
        tracing::info!("  Click queue capacity: {}", self.click_queue_capacity);
    }
}

fn read_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error when validation fails.
pub fn load_from_env() -> Result<CoreConfig> {
    let config = CoreConfig::from_env();
    config.validate()?;
    Ok(config)
}
