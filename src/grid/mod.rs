//! Regular latitude/longitude sampling grid.
//!
//! Latitude rows run from the south pole up to and including the north pole; longitude
//! columns run from the antimeridian eastward, excluding the duplicate column at +180°.

mod lattice;

pub use lattice::{Cells, GridCell, GridError, GridSpec, LatLonGrid};
