use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod date;
pub mod enricher;
pub mod io;
pub mod property_type;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
