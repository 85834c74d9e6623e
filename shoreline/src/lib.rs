#![doc = document_features::document_features!()]
//! Exact nearest-coastline distances for geographic points.
//!
//! A [`CoastalDistanceIndex`](index::CoastalDistanceIndex) is built once from a coastline and then
//! answers minimum great-circle distance queries for single points or whole batches.

/// Geographic primitives and the geodesic model
pub mod geometry;

/// Coastline boundaries and query results
pub mod entities;

/// Everything related to answering nearest-coastline queries
pub mod index;

/// Importing coastline geometry from external (GeoJSON) representations
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

mod error;

#[doc(inline)]
pub use error::Result;
#[doc(inline)]
pub use error::ShorelineError;
