//! Synthetic climate model.
//!
//! Produces per-cell temperatures from a latitudinal baseline, a regional pattern,
//! a seasonal cycle and a secular warming trend.

mod config;
mod temperature;
mod util;

pub use config::TemperatureModel;
pub use temperature::{
    magnitude, raw_temperature_c, seasonal_term_c, temperature_c, warming_offset_c, TimeForcing,
};
pub use util::{round_tenth, season_effect};
