use serde::{Deserialize, Serialize};

/// A GeoJSON position: `[longitude, latitude]`, optionally followed by an altitude (ignored)
pub type ExtPosition = Vec<f64>;

/// Any GeoJSON document that can carry a coastline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum ExtBoundaryResource {
    Collection(ExtFeatureCollection),
    Geometry(ExtGeometry),
    Feature(ExtFeature),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFeatureCollection {
    pub features: Vec<ExtFeature>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtFeature {
    /// Features without geometry are allowed by GeoJSON, they carry no coastline
    pub geometry: Option<ExtGeometry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
}

/// The GeoJSON geometry types which can represent (parts of) a coastline
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum ExtGeometry {
    /// A single polyline
    LineString { coordinates: Vec<ExtPosition> },
    /// Multiple disjoint polylines
    MultiLineString { coordinates: Vec<Vec<ExtPosition>> },
    /// An outer ring followed by optional inner rings (holes)
    Polygon { coordinates: Vec<Vec<ExtPosition>> },
    /// Multiple polygons, e.g. a mainland with islands
    MultiPolygon {
        coordinates: Vec<Vec<Vec<ExtPosition>>>,
    },
}

impl ExtGeometry {
    /// All polylines/rings of the geometry, in document order
    pub fn rings(&self) -> Vec<&[ExtPosition]> {
        match self {
            ExtGeometry::LineString { coordinates } => vec![coordinates.as_slice()],
            ExtGeometry::MultiLineString { coordinates } | ExtGeometry::Polygon { coordinates } => {
                coordinates.iter().map(|r| r.as_slice()).collect()
            }
            ExtGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .map(|r| r.as_slice())
                .collect(),
        }
    }
}
