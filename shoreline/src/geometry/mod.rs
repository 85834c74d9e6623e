/// Great-circle distance model shared by every distance in the crate
pub mod geodesic;
pub mod geo_traits;
pub mod primitives;
