//! Field synthesizer and its output types.

use std::iter::FusedIterator;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::climate::{magnitude, temperature_c, TemperatureModel, TimeForcing};
use crate::grid::{Cells, GridCell, GridError, LatLonGrid};
use crate::time::{parse_time_index, resolve_time, ResolvedTime};

use super::{FieldConfig, UNITS};

/// One synthesized sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Temperature (°C), one decimal place.
    pub temperature_c: f64,
    /// Normalized temperature in [0, 1].
    pub magnitude: f64,
}

/// Descriptive metadata attached to every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub source: String,
    pub description: String,
    pub units: String,
    /// Grid spacing label, e.g. `"4deg"`.
    pub resolution: String,
    /// Calendar label of the time index, e.g. `"Nov 2025"`.
    pub time: String,
    #[serde(rename = "timeIndex")]
    pub time_index: i64,
}

/// A fully synthesized field. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldResult {
    metadata: FieldMetadata,
    points: Vec<SamplePoint>,
}

impl FieldResult {
    pub fn metadata(&self) -> &FieldMetadata {
        &self.metadata
    }

    /// Samples in row-major grid order (latitude, then longitude).
    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn summary(&self) -> FieldSummary {
        FieldSummary::from_samples(self.points.iter().copied())
    }

    pub fn into_parts(self) -> (FieldMetadata, Vec<SamplePoint>) {
        (self.metadata, self.points)
    }
}

/// Aggregate statistics over a field's temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSummary {
    pub points: usize,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub mean_temperature_c: f64,
}

impl FieldSummary {
    pub fn from_samples(samples: impl IntoIterator<Item = SamplePoint>) -> Self {
        let mut points = 0usize;
        let mut min_t = f64::INFINITY;
        let mut max_t = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for s in samples {
            points += 1;
            min_t = min_t.min(s.temperature_c);
            max_t = max_t.max(s.temperature_c);
            sum += s.temperature_c;
        }
        if points == 0 {
            return Self {
                points,
                min_temperature_c: 0.0,
                max_temperature_c: 0.0,
                mean_temperature_c: 0.0,
            };
        }
        Self {
            points,
            min_temperature_c: min_t,
            max_temperature_c: max_t,
            mean_temperature_c: sum / points as f64,
        }
    }
}

#[inline]
fn sample(cell: GridCell, forcing: &TimeForcing, model: &TemperatureModel) -> SamplePoint {
    let t = temperature_c(cell, forcing, model);
    SamplePoint {
        latitude: cell.latitude,
        longitude: cell.longitude,
        temperature_c: t,
        magnitude: magnitude(t, model),
    }
}

/// Lazy, restartable sequence of samples for one time index.
///
/// Cloning yields an independent iterator from the same position.
#[derive(Debug, Clone)]
pub struct Samples {
    cells: Cells,
    forcing: TimeForcing,
    model: TemperatureModel,
}

impl Iterator for Samples {
    type Item = SamplePoint;

    fn next(&mut self) -> Option<SamplePoint> {
        let cell = self.cells.next()?;
        Some(sample(cell, &self.forcing, &self.model))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

impl ExactSizeIterator for Samples {}
impl FusedIterator for Samples {}

/// Stateless generator of temperature fields.
///
/// Holds only configuration; every call is independent, so one instance can be shared
/// across threads.
#[derive(Debug, Clone)]
pub struct FieldSynthesizer {
    config: FieldConfig,
    grid: LatLonGrid,
}

impl Default for FieldSynthesizer {
    fn default() -> Self {
        Self {
            config: FieldConfig::default(),
            grid: LatLonGrid::default(),
        }
    }
}

impl FieldSynthesizer {
    /// Creates a synthesizer, validating the grid spacing.
    pub fn new(config: FieldConfig) -> Result<Self, GridError> {
        let grid = LatLonGrid::new(config.grid)?;
        Ok(Self { config, grid })
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn grid(&self) -> &LatLonGrid {
        &self.grid
    }

    pub fn default_time_index(&self) -> i64 {
        self.config.time.default_time_index
    }

    /// Parses a raw request parameter, substituting the configured default.
    pub fn resolve_index(&self, raw: Option<&str>) -> i64 {
        parse_time_index(raw, self.default_time_index())
    }

    pub fn resolve_time(&self, time_index: i64) -> ResolvedTime {
        resolve_time(time_index, &self.config.time)
    }

    /// Metadata for the field at `time_index`.
    pub fn metadata(&self, time_index: i64) -> FieldMetadata {
        self.metadata_for(time_index, &self.resolve_time(time_index))
    }

    fn metadata_for(&self, time_index: i64, time: &ResolvedTime) -> FieldMetadata {
        FieldMetadata {
            source: self.config.source.clone(),
            description: self.config.description.clone(),
            units: UNITS.to_string(),
            resolution: self.config.grid.resolution_label(),
            time: time.label.clone(),
            time_index,
        }
    }

    fn forcing(&self, time_index: i64, time: &ResolvedTime) -> TimeForcing {
        TimeForcing::new(time_index, time.month, &self.config.model)
    }

    /// Lazily generates the samples at `time_index` in row-major order.
    pub fn samples(&self, time_index: i64) -> Samples {
        let time = self.resolve_time(time_index);
        Samples {
            cells: self.grid.cells(),
            forcing: self.forcing(time_index, &time),
            model: self.config.model,
        }
    }

    /// Builds the complete field at `time_index`.
    ///
    /// Cells are computed in parallel; output order matches [`samples`](Self::samples).
    pub fn synthesize(&self, time_index: i64) -> FieldResult {
        let time = self.resolve_time(time_index);
        let forcing = self.forcing(time_index, &time);
        let model = &self.config.model;
        let grid = &self.grid;

        let points: Vec<SamplePoint> = (0..grid.len())
            .into_par_iter()
            .filter_map(|i| grid.cell_at(i))
            .map(|cell| sample(cell, &forcing, model))
            .collect();

        debug!(
            time_index,
            time = %time.label,
            points = points.len(),
            "synthesized field"
        );

        FieldResult {
            metadata: self.metadata_for(time_index, &time),
            points,
        }
    }

    /// Builds the field for a raw, possibly malformed, time index parameter.
    pub fn synthesize_raw(&self, raw: Option<&str>) -> FieldResult {
        self.synthesize(self.resolve_index(raw))
    }
}
