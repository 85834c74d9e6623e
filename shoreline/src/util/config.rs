use serde::{Deserialize, Serialize};

///Configuration of the [`CoastalDistanceIndex`](crate::index::CoastalDistanceIndex)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct IndexConfig {
    ///Which parts of the coastline distances are measured to
    pub model: DistanceModel,
    ///Maximum number of vertices/segments stored in a leaf of the tree
    pub leaf_size: usize,
    ///Evaluate large batches on the rayon thread pool (requires the `parallel` feature)
    pub parallel: bool,
    ///Batches smaller than this are always evaluated on the calling thread
    pub parallel_threshold: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            model: DistanceModel::Vertex,
            leaf_size: 16,
            parallel: true,
            parallel_threshold: 256,
        }
    }
}

/// Determines what "distance to the coastline" means
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DistanceModel {
    ///Minimum over the vertices of the coastline
    #[default]
    Vertex,
    ///Minimum over every point of the great-circle segments joining consecutive vertices.
    ///Never larger than [`DistanceModel::Vertex`].
    Segment,
}
