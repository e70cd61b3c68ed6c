//! Background worker configuration.

use std::time::Duration;

use anyhow::{Result as AnyhowResult, anyhow};
use clap::Args;
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Bot poll worker configuration.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
#[must_use = "config does nothing unless you use it"]
pub struct WorkerConfig {
    /// Seconds between bot poll cycles.
    ///
    /// Each cycle asks the notetaker service for recordings of every
    /// scheduled bot whose meeting has ended. Valid range: 1-3600 seconds.
    #[arg(long, env = "BOT_POLL_INTERVAL", default_value_t = 120)]
    #[serde(default = "default_poll_interval")]
    pub poll_interval: u64,
}

fn default_poll_interval() -> u64 {
    120
}

impl WorkerConfig {
    /// Validates the poll cadence.
    ///
    /// # Errors
    ///
    /// Returns an error when the interval is zero or above one hour.
    pub fn validate(&self) -> AnyhowResult<()> {
        if self.poll_interval == 0 || self.poll_interval > 3600 {
            return Err(anyhow!(
                "Poll interval {} seconds is invalid. Must be between 1 and 3600 seconds.",
                self.poll_interval
            ));
        }

        Ok(())
    }

    /// Returns the poll cadence as a `Duration`.
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval)
    }

    /// Logs worker configuration at info level.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            poll_interval_secs = self.poll_interval,
            "Worker configuration"
        );
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval: default_poll_interval(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = WorkerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.poll_interval(), Duration::from_secs(120));
    }

    #[test]
    fn reject_out_of_range_intervals() {
        let mut config = WorkerConfig::default();

        config.poll_interval = 0;
        assert!(config.validate().is_err());

        config.poll_interval = 3601;
        assert!(config.validate().is_err());
    }
}
