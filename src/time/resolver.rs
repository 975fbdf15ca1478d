//! Calendar resolution of time indices.

use serde::{Deserialize, Serialize};

use super::TimeConfig;

/// Three-letter month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTHS_PER_YEAR: i64 = 12;

/// Calendar position of a time index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedTime {
    pub year: i64,
    /// 1-based month, always in `1..=12`.
    pub month: u8,
    /// `"<Mon> <year>"`, e.g. `"Nov 2025"`.
    pub label: String,
}

/// Returns the three-letter name for a 1-based month.
///
/// Out-of-range months wrap, so this never panics.
pub fn month_abbrev(month: u8) -> &'static str {
    MONTH_NAMES[(month as usize + 11) % 12]
}

/// Resolves `time_index` into year, month and label.
///
/// Floored division and Euclidean remainder keep negative indices well-formed:
/// index `-1` is December of the year before the epoch.
pub fn resolve_time(time_index: i64, cfg: &TimeConfig) -> ResolvedTime {
    let year = cfg
        .epoch_year
        .saturating_add(time_index.div_euclid(MONTHS_PER_YEAR));
    let month = (time_index.rem_euclid(MONTHS_PER_YEAR) + 1) as u8;
    ResolvedTime {
        year,
        month,
        label: format!("{} {}", month_abbrev(month), year),
    }
}
