//! Field synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::climate::TemperatureModel;
use crate::grid::GridSpec;
use crate::time::TimeConfig;

/// Source label reported in field metadata.
pub const DEFAULT_SOURCE: &str = "zarr/.Land_TAVG_Gridded_0p25deg.zarr";
/// Description reported in field metadata.
pub const DEFAULT_DESCRIPTION: &str = "Time-indexed Temperature Simulation";
/// Temperature units reported in field metadata.
pub const UNITS: &str = "degree C";

/// Everything needed to synthesize a field, minus the time index itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub time: TimeConfig,
    pub grid: GridSpec,
    pub model: TemperatureModel,
    pub source: String,
    pub description: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            time: TimeConfig::default(),
            grid: GridSpec::default(),
            model: TemperatureModel::default(),
            source: DEFAULT_SOURCE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl FieldConfig {
    /// Default configuration with a different grid spacing.
    pub fn with_step(step_deg: f64) -> Self {
        Self {
            grid: GridSpec { step_deg },
            ..Default::default()
        }
    }
}
