pub mod forney;
pub mod generator;
pub mod syndrome;

pub use generator::*;
