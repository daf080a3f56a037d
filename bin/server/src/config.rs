//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables, with `__` as
//! the nesting separator:
//!
//! - `PASSWORD_RESET__LIMITS__MAX_REQUESTS` (default 3)
//! - `PASSWORD_RESET__LIMITS__WINDOW_SECONDS` (default 900)
//! - `PASSWORD_RESET__PRUNE_INTERVAL_SECONDS` (default 300)
//!
//! Leptos' own settings (`LEPTOS_SITE_ADDR` and friends) are read separately
//! by `leptos::config::get_configuration`.

use serde::Deserialize;
use subtrack_account::RateLimitConfig;

/// Server configuration composed from library configs.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Forgot-password flow configuration.
    #[serde(default)]
    pub password_reset: PasswordResetConfig,
}

/// Password-reset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordResetConfig {
    /// Per-address request limits.
    #[serde(default)]
    pub limits: RateLimitConfig,

    /// Interval between rate limiter pruning runs, in seconds.
    #[serde(default = "default_prune_interval_seconds")]
    pub prune_interval_seconds: u64,
}

fn default_prune_interval_seconds() -> u64 {
    300
}

impl Default for PasswordResetConfig {
    fn default() -> Self {
        Self {
            limits: RateLimitConfig::default(),
            prune_interval_seconds: default_prune_interval_seconds(),
        }
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .separator("__")
        .try_parsing(true)
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or
    /// if the prune interval is zero.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_builder(config::Config::builder().add_source(environment()))
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.password_reset.prune_interval_seconds == 0 {
            return Err(config::ConfigError::Message(
                "password_reset.prune_interval_seconds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
