//! Field synthesis: one temperature sample per grid cell for a given time index.

mod config;
mod synth;

pub use config::{FieldConfig, DEFAULT_DESCRIPTION, DEFAULT_SOURCE, UNITS};
pub use synth::{FieldMetadata, FieldResult, FieldSummary, FieldSynthesizer, SamplePoint, Samples};
