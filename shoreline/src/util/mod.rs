/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;
pub mod terminator;

mod config;
mod fpa;

#[doc(inline)]
pub use config::DistanceModel;
#[doc(inline)]
pub use config::IndexConfig;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use terminator::Terminator;
