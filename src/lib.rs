pub mod analyzers;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod readers;
pub mod utils;

pub use error::{Result, SightingError};
pub use models::{Coordinate, Sighting};
pub use readers::load;
