use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

/// External (serializable) GeoJSON representations of coastline geometry.
pub mod ext_repr;

/// All logic for converting external representations into internal ones
pub mod import;

const SUPPORTED_RESOURCES: &str = "expected a GeoJSON FeatureCollection, Feature or geometry \
     of type LineString, MultiLineString, Polygon or MultiPolygon";

/// Reads a GeoJSON resource (feature collection, feature or bare geometry) from disk.
pub fn read_boundary_resource(path: &Path) -> Result<ext_repr::ExtBoundaryResource> {
    let file = File::open(path)
        .with_context(|| format!("could not open boundary file: {}", path.display()))?;
    let resource = parse_boundary_resource(BufReader::new(file))
        .with_context(|| format!("could not parse boundary file: {}", path.display()))?;
    info!("[IO] boundary resource read from {}", path.display());
    Ok(resource)
}

/// Parses a GeoJSON resource. Unsupported geometry types (e.g. `Point`) are reported with the list of supported ones.
pub fn parse_boundary_resource(reader: impl Read) -> Result<ext_repr::ExtBoundaryResource> {
    serde_json::from_reader(reader).context(SUPPORTED_RESOURCES)
}
