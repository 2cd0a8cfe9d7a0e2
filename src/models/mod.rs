pub mod coordinate;
pub mod sighting;

pub use coordinate::Coordinate;
pub use sighting::Sighting;
