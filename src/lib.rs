//! Time-indexed synthetic climate grid generator.
//!
//! Maps a month-granular time index onto a calendar label and a deterministic global
//! temperature field sampled on a regular latitude/longitude grid, serialized as GeoJSON.

pub mod time;
pub mod grid;
pub mod climate;
pub mod field;
pub mod export;
pub mod server;

pub use climate::TemperatureModel;
pub use field::{FieldConfig, FieldResult, FieldSynthesizer, SamplePoint};
pub use grid::{GridCell, GridSpec, LatLonGrid};
pub use time::{resolve_time, ResolvedTime, TimeConfig};
