//! Export module for serializing synthesized fields.
//!
//! Fields are written as GeoJSON `FeatureCollection`s, either from a materialized
//! [`FieldResult`](crate::field::FieldResult) or streamed straight from the lazy sample
//! iterator.

mod geojson;

pub use geojson::{
    export_field_geojson, stream_field_geojson, to_geojson_string, write_field_geojson,
    ExportError, GeoJson,
};
