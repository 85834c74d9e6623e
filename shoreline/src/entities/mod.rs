mod boundary;
mod coastline;
mod distance_result;

#[doc(inline)]
pub use boundary::CoastlineBoundary;
#[doc(inline)]
pub use coastline::Coastline;
#[doc(inline)]
pub use distance_result::DistanceResult;
#[doc(inline)]
pub use distance_result::NearestFeature;
