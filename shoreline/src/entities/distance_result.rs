/// Outcome of a successful nearest-coastline query
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceResult {
    /// Great-circle distance to the coastline, in meters
    pub distance: f64,
    /// The part of the coastline realizing the minimum
    pub nearest: NearestFeature,
}

/// Identifies a vertex or a segment of a [`Coastline`](crate::entities::Coastline)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NearestFeature {
    /// Point `index` of ring `ring`
    Vertex { ring: usize, index: usize },
    /// Segment between points `index` and `index + 1` of ring `ring`
    Segment { ring: usize, index: usize },
}

impl NearestFeature {
    pub fn ring(&self) -> usize {
        match self {
            NearestFeature::Vertex { ring, .. } | NearestFeature::Segment { ring, .. } => *ring,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            NearestFeature::Vertex { index, .. } | NearestFeature::Segment { index, .. } => *index,
        }
    }
}
