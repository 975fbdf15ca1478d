//! GeoJSON serialization of temperature fields.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::iter::Copied;
use std::path::Path;
use std::slice;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use thiserror::Error;

use crate::field::{FieldMetadata, FieldResult, FieldSynthesizer, SamplePoint, Samples};

/// Errors that can occur during GeoJSON export.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// GeoJSON view of a field: metadata plus a feature sequence produced from `samples`.
///
/// `samples` is cloned on every serialization, so any restartable iterator works and
/// features are encoded one at a time without an intermediate collection.
#[derive(Debug, Clone)]
pub struct GeoJson<'a, I> {
    metadata: &'a FieldMetadata,
    samples: I,
}

impl<'a> GeoJson<'a, Copied<slice::Iter<'a, SamplePoint>>> {
    /// View over an already synthesized field.
    pub fn from_field(field: &'a FieldResult) -> Self {
        Self {
            metadata: field.metadata(),
            samples: field.points().iter().copied(),
        }
    }
}

impl<'a> GeoJson<'a, Samples> {
    /// View over a lazily generated field.
    pub fn stream(metadata: &'a FieldMetadata, samples: Samples) -> Self {
        Self { metadata, samples }
    }
}

impl<I> Serialize for GeoJson<'_, I>
where
    I: Iterator<Item = SamplePoint> + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("FeatureCollection", 3)?;
        s.serialize_field("type", "FeatureCollection")?;
        s.serialize_field("metadata", self.metadata)?;
        s.serialize_field("features", &Features(self.samples.clone()))?;
        s.end()
    }
}

struct Features<I>(I);

impl<I> Serialize for Features<I>
where
    I: Iterator<Item = SamplePoint> + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.clone().map(Feature::from))
    }
}

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: Properties,
    geometry: Point,
}

#[derive(Serialize)]
struct Properties {
    temp: f64,
    mag: f64,
}

#[derive(Serialize)]
struct Point {
    #[serde(rename = "type")]
    kind: &'static str,
    /// `[longitude, latitude]`, GeoJSON axis order.
    coordinates: [f64; 2],
}

impl From<SamplePoint> for Feature {
    fn from(p: SamplePoint) -> Self {
        Self {
            kind: "Feature",
            properties: Properties {
                temp: p.temperature_c,
                mag: p.magnitude,
            },
            geometry: Point {
                kind: "Point",
                coordinates: [p.longitude, p.latitude],
            },
        }
    }
}

fn write_json<W: Write, T: Serialize>(writer: W, value: &T, pretty: bool) -> Result<(), ExportError> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

/// Encodes a field as a compact GeoJSON string.
pub fn to_geojson_string(field: &FieldResult) -> Result<String, ExportError> {
    Ok(serde_json::to_string(&GeoJson::from_field(field))?)
}

/// Writes a synthesized field as GeoJSON.
pub fn write_field_geojson<W: Write>(
    field: &FieldResult,
    writer: W,
    pretty: bool,
) -> Result<(), ExportError> {
    write_json(writer, &GeoJson::from_field(field), pretty)
}

/// Generates and writes the field at `time_index` without materializing its points.
pub fn stream_field_geojson<W: Write>(
    synth: &FieldSynthesizer,
    time_index: i64,
    writer: W,
    pretty: bool,
) -> Result<(), ExportError> {
    let metadata = synth.metadata(time_index);
    write_json(
        writer,
        &GeoJson::stream(&metadata, synth.samples(time_index)),
        pretty,
    )
}

/// Streams the field at `time_index` to a GeoJSON file, creating parent directories.
///
/// # Returns
/// `Ok(())` on success, or the first IO/encoding error encountered
pub fn export_field_geojson(
    synth: &FieldSynthesizer,
    time_index: i64,
    path: &Path,
    pretty: bool,
) -> Result<(), ExportError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    stream_field_geojson(synth, time_index, &mut writer, pretty)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn test_feature_collection_shape() {
        let field = FieldSynthesizer::default().synthesize(3310);
        let value: Value = serde_json::from_str(&to_geojson_string(&field).unwrap()).unwrap();

        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["metadata"]["units"], "degree C");
        assert_eq!(value["metadata"]["resolution"], "4deg");
        assert_eq!(value["metadata"]["time"], "Nov 2025");
        assert_eq!(value["metadata"]["timeIndex"], 3310);

        let features = value["features"].as_array().unwrap();
        assert_eq!(features.len(), 4140);

        let first = &features[0];
        assert_eq!(first["type"], "Feature");
        assert_eq!(first["geometry"]["type"], "Point");
        assert_eq!(first["geometry"]["coordinates"][0], -180.0);
        assert_eq!(first["geometry"]["coordinates"][1], -90.0);
        assert_eq!(first["properties"]["temp"], -31.5);
        assert_eq!(first["properties"]["mag"], 0.0);
    }

    #[test]
    fn test_stream_matches_materialized() {
        let synth = FieldSynthesizer::default();
        let field = synth.synthesize(1000);

        let mut materialized = Vec::new();
        write_field_geojson(&field, &mut materialized, false).unwrap();
        let mut streamed = Vec::new();
        stream_field_geojson(&synth, 1000, &mut streamed, false).unwrap();

        assert_eq!(materialized, streamed);
    }

    #[test]
    fn test_view_serializes_repeatedly() {
        let synth = FieldSynthesizer::default();
        let metadata = synth.metadata(5);
        let view = GeoJson::stream(&metadata, synth.samples(5));
        let a = serde_json::to_string(&view).unwrap();
        let b = serde_json::to_string(&view).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_export_field_geojson_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("field.geojson");
        let synth = FieldSynthesizer::default();

        export_field_geojson(&synth, 0, &path, true).unwrap();

        assert!(path.exists());
        let value: Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["metadata"]["time"], "Jan 1750");
        assert_eq!(value["features"].as_array().unwrap().len(), 4140);
    }

    #[test]
    fn test_export_to_directory_path_fails() {
        let dir = tempdir().unwrap();
        // A directory cannot be opened as the output file.
        let result = export_field_geojson(&FieldSynthesizer::default(), 0, dir.path(), false);
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
