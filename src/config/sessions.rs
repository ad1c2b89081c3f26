//! Session retention configuration.

use serde::Deserialize;

use super::error::ValidationError;

/// Session retention configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionsConfig {
    /// How long an issued link stays usable, in seconds. Zero disables
    /// expiry entirely (default: 604800, i.e. seven days).
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// How often the background sweep removes expired sessions, in
    /// seconds (default: 3600).
    #[serde(default = "default_sweep_interval_secs")]
    pub sweep_interval_secs: u64,
}

fn default_ttl_secs() -> u64 {
    604_800
}

fn default_sweep_interval_secs() -> u64 {
    3_600
}

impl Default for SessionsConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            sweep_interval_secs: default_sweep_interval_secs(),
        }
    }
}

impl SessionsConfig {
    /// Session TTL, or `None` when expiry is disabled.
    pub fn ttl(&self) -> Option<u64> {
        (self.ttl_secs > 0).then_some(self.ttl_secs)
    }

    /// # Errors
    ///
    /// Returns `ValidationError` if the sweep interval is zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sweep_interval_secs == 0 {
            return Err(ValidationError::InvalidSweepInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_seven_day_ttl() {
        let config = SessionsConfig::default();
        assert_eq!(config.ttl(), Some(604_800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_ttl_disables_expiry() {
        let config = SessionsConfig {
            ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.ttl(), None);
    }

    #[test]
    fn zero_sweep_interval_is_rejected() {
        let config = SessionsConfig {
            sweep_interval_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSweepInterval));
    }
}
