//! Tracker configuration
//!
//! Defaults: a 28-day cycle and 5-day period when the user gives none,
//! three upcoming reminders, and health trends over the 30 most recent logs.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::cycle::{MAX_CYCLE_LENGTH, MIN_CYCLE_LENGTH};
use crate::records::{DEFAULT_CYCLE_LENGTH, DEFAULT_PERIOD_LENGTH};
use crate::{Error, Result};

/// Settings for [`crate::tracker::Tracker`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrackerConfig {
    /// Cycle length used when a new cycle omits one.
    pub default_cycle_length: i32,
    /// Period length used when a new cycle omits one.
    pub default_period_length: i32,
    /// Accepted cycle lengths for newly logged cycles.
    pub cycle_length_range: RangeInclusive<i32>,
    /// Accepted period lengths for newly logged cycles.
    pub period_length_range: RangeInclusive<i32>,
    /// How many active reminders the upcoming list shows.
    pub upcoming_reminder_limit: usize,
    /// How many of the newest health logs feed the trend summary.
    pub health_trend_window: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            default_cycle_length: DEFAULT_CYCLE_LENGTH,
            default_period_length: DEFAULT_PERIOD_LENGTH,
            cycle_length_range: MIN_CYCLE_LENGTH..=MAX_CYCLE_LENGTH,
            period_length_range: 1..=15,
            upcoming_reminder_limit: 3,
            health_trend_window: 30,
        }
    }
}

impl TrackerConfig {
    /// Check that the settings are self-consistent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a range is empty or a default falls
    /// outside its range.
    pub fn validate(&self) -> Result<()> {
        if self.cycle_length_range.is_empty() || *self.cycle_length_range.start() < 1 {
            return Err(Error::InvalidInput(format!(
                "cycle length range {:?} must be non-empty and positive",
                self.cycle_length_range
            )));
        }
        if self.period_length_range.is_empty() || *self.period_length_range.start() < 1 {
            return Err(Error::InvalidInput(format!(
                "period length range {:?} must be non-empty and positive",
                self.period_length_range
            )));
        }
        if !self.cycle_length_range.contains(&self.default_cycle_length) {
            return Err(Error::InvalidInput(format!(
                "default cycle length {} outside {:?}",
                self.default_cycle_length, self.cycle_length_range
            )));
        }
        if !self.period_length_range.contains(&self.default_period_length) {
            return Err(Error::InvalidInput(format!(
                "default period length {} outside {:?}",
                self.default_period_length, self.period_length_range
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TrackerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.default_cycle_length, 28);
        assert_eq!(config.upcoming_reminder_limit, 3);
    }

    #[test]
    fn test_default_outside_range_rejected() {
        let config = TrackerConfig {
            default_cycle_length: 70,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_range_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let config = TrackerConfig {
            period_length_range: 10..=2,
            ..TrackerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"upcomingReminderLimit": 5}"#).unwrap();
        assert_eq!(config.upcoming_reminder_limit, 5);
        assert_eq!(config.default_cycle_length, 28);
        assert_eq!(config.health_trend_window, 30);
    }
}
