//! Temperature model parameters.

use serde::{Deserialize, Serialize};

/// Parameters of the synthetic temperature model.
///
/// Units:
/// - temperatures: °C
/// - angles: degrees
/// - time: months (time index units)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureModel {
    // Latitudinal baseline
    pub equator_temp_c: f64,
    pub lat_gradient_c_per_deg: f64,

    // Regional pattern
    pub zonal_amplitude_c: f64,      // sin(longitude) term
    pub meridional_amplitude_c: f64, // cos(2 * latitude) term

    // Season model
    pub seasonal_amplitude_c: f64, // full swing reached at the poles

    // Secular trend
    pub warming_total_c: f64,
    pub warming_span_months: f64,

    // Magnitude normalization
    pub magnitude_min_c: f64,
    pub magnitude_span_c: f64,
}

impl Default for TemperatureModel {
    fn default() -> Self {
        Self {
            equator_temp_c: 30.0,
            lat_gradient_c_per_deg: 0.6,

            zonal_amplitude_c: 3.0,
            meridional_amplitude_c: 2.0,

            seasonal_amplitude_c: 15.0,

            warming_total_c: 2.0,
            warming_span_months: 3311.0,

            magnitude_min_c: -25.0,
            magnitude_span_c: 65.0,
        }
    }
}

impl TemperatureModel {
    /// The model with the secular trend switched off.
    pub fn without_warming() -> Self {
        Self {
            warming_total_c: 0.0,
            ..Default::default()
        }
    }
}
