//! Synthetic temperature model.
//!
//! Temperature at a cell is the sum of a latitudinal baseline, a secular warming offset,
//! a fixed regional pattern and a latitude-weighted seasonal swing.

use std::f64::consts::PI;

use crate::grid::GridCell;

use super::util::{round_tenth, season_effect};
use super::TemperatureModel;

/// Time-dependent inputs of the model, resolved once per field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeForcing {
    /// Secular warming offset (°C).
    pub warming_c: f64,
    /// Seasonal phase sine in [-1, 1].
    pub season: f64,
}

impl TimeForcing {
    /// Forcing for `time_index`, whose calendar month is `month` (1-based).
    pub fn new(time_index: i64, month: u8, model: &TemperatureModel) -> Self {
        Self {
            warming_c: warming_offset_c(time_index, model),
            season: season_effect(month),
        }
    }
}

/// Linear warming trend: `warming_total_c` spread over `warming_span_months`.
///
/// Not clamped; indices outside the nominal span extrapolate.
pub fn warming_offset_c(time_index: i64, model: &TemperatureModel) -> f64 {
    (time_index as f64 / model.warming_span_months) * model.warming_total_c
}

/// Seasonal contribution (°C) at `latitude_deg`. Zero on the equator, full swing at the poles.
pub fn seasonal_term_c(latitude_deg: f64, season: f64, model: &TemperatureModel) -> f64 {
    season * (latitude_deg.abs() / 90.0) * model.seasonal_amplitude_c
}

/// Unrounded temperature (°C) at `cell`.
pub fn raw_temperature_c(cell: GridCell, forcing: &TimeForcing, model: &TemperatureModel) -> f64 {
    let lat = cell.latitude;
    let lng = cell.longitude;

    let baseline = model.equator_temp_c - lat.abs() * model.lat_gradient_c_per_deg;

    let regional = (lng * PI / 180.0).sin() * model.zonal_amplitude_c
        + (lat * PI / 90.0).cos() * model.meridional_amplitude_c;

    let seasonal = seasonal_term_c(lat, forcing.season, model);

    baseline + forcing.warming_c + regional + seasonal
}

/// Temperature (°C) at `cell`, rounded to one decimal place.
pub fn temperature_c(cell: GridCell, forcing: &TimeForcing, model: &TemperatureModel) -> f64 {
    round_tenth(raw_temperature_c(cell, forcing, model))
}

/// Maps a temperature onto [0, 1] for visualization intensity.
pub fn magnitude(temperature_c: f64, model: &TemperatureModel) -> f64 {
    ((temperature_c - model.magnitude_min_c) / model.magnitude_span_c).clamp(0.0, 1.0)
}
