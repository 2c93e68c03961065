pub mod extract;
pub mod markers;

pub use extract::{extract, PressureGroup};
