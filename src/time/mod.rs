//! Time resolution: maps a month-granular time index onto a calendar label.
//!
//! One index unit is one month counted from a fixed epoch (January 1750 by default).

mod config;
mod parse;
mod resolver;

pub use config::TimeConfig;
pub use parse::parse_time_index;
pub use resolver::{month_abbrev, resolve_time, ResolvedTime, MONTH_NAMES};
