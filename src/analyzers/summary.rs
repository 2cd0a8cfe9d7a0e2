use crate::error::{Result, SightingError};
use crate::models::Sighting;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub unique_states: usize,
    pub unique_shapes: usize,
    pub first_sighting: NaiveDateTime,
    pub last_sighting: NaiveDateTime,
    pub total_duration: u64,
    pub longest_duration: u64,
    pub geographic_bounds: GeographicBounds,
}

#[derive(Debug, Serialize)]
pub struct GeographicBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

pub struct SightingAnalyzer;

impl SightingAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// One-pass overview of a loaded dataset
    pub fn summarize(&self, sightings: &[Sighting]) -> Result<DatasetSummary> {
        let first = sightings.first().ok_or(SightingError::EmptyDataset)?;

        let mut states = HashSet::new();
        let mut shapes = HashSet::new();
        let mut first_sighting = first.timestamp;
        let mut last_sighting = first.timestamp;
        let mut total_duration = 0u64;
        let mut longest_duration = 0u64;

        let mut min_lat = first.location.latitude;
        let mut max_lat = first.location.latitude;
        let mut min_lon = first.location.longitude;
        let mut max_lon = first.location.longitude;

        for sighting in sightings {
            states.insert(sighting.state.as_str());
            shapes.insert(sighting.shape.as_str());

            first_sighting = first_sighting.min(sighting.timestamp);
            last_sighting = last_sighting.max(sighting.timestamp);

            total_duration += sighting.duration;
            longest_duration = longest_duration.max(sighting.duration);

            min_lat = min_lat.min(sighting.location.latitude);
            max_lat = max_lat.max(sighting.location.latitude);
            min_lon = min_lon.min(sighting.location.longitude);
            max_lon = max_lon.max(sighting.location.longitude);
        }

        Ok(DatasetSummary {
            total_records: sightings.len(),
            unique_states: states.len(),
            unique_shapes: shapes.len(),
            first_sighting,
            last_sighting,
            total_duration,
            longest_duration,
            geographic_bounds: GeographicBounds {
                min_lat,
                max_lat,
                min_lon,
                max_lon,
            },
        })
    }
}

impl Default for SightingAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DatasetSummary {
    pub fn summary(&self) -> String {
        format!(
            "Sightings: {} total\n\
            States: {} | Shapes: {}\n\
            Date Range: {} to {}\n\
            Total Duration: {} s (longest {} s)\n\
            Coverage: lat {:.2} to {:.2}, lon {:.2} to {:.2}",
            self.total_records,
            self.unique_states,
            self.unique_shapes,
            self.first_sighting,
            self.last_sighting,
            self.total_duration,
            self.longest_duration,
            self.geographic_bounds.min_lat,
            self.geographic_bounds.max_lat,
            self.geographic_bounds.min_lon,
            self.geographic_bounds.max_lon
        )
    }
}
