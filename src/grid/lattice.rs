//! Grid specification, cells, and row-major cell iteration.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LAT_MIN: f64 = -90.0;
const LAT_MAX: f64 = 90.0;
const LNG_MIN: f64 = -180.0;
const LNG_MAX: f64 = 180.0;

/// Errors that can occur when configuring a grid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Invalid grid step: {0}deg (must be finite and within [{min}, {max}])", min = GridSpec::MIN_STEP_DEG, max = GridSpec::MAX_STEP_DEG)]
    InvalidStep(f64),
}

/// Grid resolution in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Spacing between adjacent rows and columns, in degrees.
    pub step_deg: f64,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self { step_deg: 4.0 }
    }
}

impl GridSpec {
    /// Finest supported spacing, the resolution of the gridded land dataset the field mimics.
    pub const MIN_STEP_DEG: f64 = 0.25;
    /// Coarsest supported spacing (one row per pole).
    pub const MAX_STEP_DEG: f64 = 180.0;

    pub fn new(step_deg: f64) -> Result<Self, GridError> {
        let spec = Self { step_deg };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<(), GridError> {
        let s = self.step_deg;
        if !s.is_finite() || !(Self::MIN_STEP_DEG..=Self::MAX_STEP_DEG).contains(&s) {
            return Err(GridError::InvalidStep(s));
        }
        Ok(())
    }

    /// Resolution label as reported in field metadata, e.g. `"4deg"`.
    pub fn resolution_label(&self) -> String {
        format!("{}deg", self.step_deg)
    }
}

/// One latitude/longitude sample location, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub latitude: f64,
    pub longitude: f64,
}

/// A validated grid with precomputed row/column counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLonGrid {
    step: f64,
    rows: usize,
    cols: usize,
}

impl LatLonGrid {
    pub fn new(spec: GridSpec) -> Result<Self, GridError> {
        spec.validate()?;
        Ok(Self::from_step(spec.step_deg))
    }

    fn from_step(step: f64) -> Self {
        Self {
            step,
            rows: count_steps(LAT_MIN, step, |lat| lat <= LAT_MAX),
            cols: count_steps(LNG_MIN, step, |lng| lng < LNG_MAX),
        }
    }

    pub fn spec(&self) -> GridSpec {
        GridSpec {
            step_deg: self.step,
        }
    }

    /// Number of latitude rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of longitude columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn latitude(&self, row: usize) -> f64 {
        LAT_MIN + row as f64 * self.step
    }

    #[inline]
    pub fn longitude(&self, col: usize) -> f64 {
        LNG_MIN + col as f64 * self.step
    }

    /// Cell at row-major position `index`, or `None` past the end.
    #[inline]
    pub fn cell_at(&self, index: usize) -> Option<GridCell> {
        if index >= self.len() {
            return None;
        }
        let (row, col) = (index / self.cols, index % self.cols);
        Some(GridCell {
            latitude: self.latitude(row),
            longitude: self.longitude(col),
        })
    }

    /// Lazily iterates every cell, latitude-major. Each call starts from the first cell.
    pub fn cells(&self) -> Cells {
        Cells {
            grid: *self,
            front: 0,
            back: self.len(),
        }
    }
}

impl Default for LatLonGrid {
    fn default() -> Self {
        Self::from_step(GridSpec::default().step_deg)
    }
}

impl IntoIterator for &LatLonGrid {
    type Item = GridCell;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.cells()
    }
}

/// Counts `start + i * step` values accepted by `keep`, for `i = 0, 1, ...`.
///
/// Uses the same predicate the coordinates are generated with, so floating-point
/// rounding in `span / step` never adds or drops an edge row.
fn count_steps(start: f64, step: f64, keep: impl Fn(f64) -> bool) -> usize {
    let at = |i: usize| start + i as f64 * step;
    let mut n = ((start.abs() * 2.0) / step).floor() as usize + 1;
    while n > 0 && !keep(at(n - 1)) {
        n -= 1;
    }
    while keep(at(n)) {
        n += 1;
    }
    n
}

/// Row-major iterator over grid cells.
#[derive(Debug, Clone)]
pub struct Cells {
    grid: LatLonGrid,
    front: usize,
    back: usize,
}

impl Iterator for Cells {
    type Item = GridCell;

    fn next(&mut self) -> Option<GridCell> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.grid.cell_at(self.front);
        self.front += 1;
        cell
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<GridCell> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<GridCell> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.grid.cell_at(self.back)
    }
}

impl ExactSizeIterator for Cells {}
impl FusedIterator for Cells {}
