//! Time axis configuration.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Configuration for the month-granular time axis.
///
/// The nominal span covers January 1750 through November 2025, but none of these values
/// bound what the resolver accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Calendar year of index 0.
    pub epoch_year: i64,
    /// Length of the nominal span in months.
    pub nominal_months: i64,
    /// Index used when a request carries no usable time index.
    pub default_time_index: i64,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            epoch_year: 1750,
            nominal_months: 3311,
            default_time_index: 3310,
        }
    }
}

impl TimeConfig {
    /// Same axis with a different fallback index.
    pub fn with_default_index(default_time_index: i64) -> Self {
        Self {
            default_time_index,
            ..Default::default()
        }
    }

    /// Indices the consuming UI is expected to scrub through.
    pub fn nominal_range(&self) -> RangeInclusive<i64> {
        0..=(self.nominal_months - 1)
    }
}
