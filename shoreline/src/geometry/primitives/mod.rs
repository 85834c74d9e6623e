mod aa_box;
mod arc;
mod geo_point;
mod unit_vector;

#[doc(inline)]
pub use aa_box::AABox;
#[doc(inline)]
pub use arc::Arc;
#[doc(inline)]
pub use geo_point::GeoPoint;
#[doc(inline)]
pub use unit_vector::UnitVector;
