pub mod sighting_reader;

pub use sighting_reader::{load, SightingReader};
