use crate::error::{Result, SightingError};
use crate::models::Coordinate;
use crate::utils::constants::EARTH_RADIUS_KM;

/// Parse a decimal-degree coordinate component
///
/// # Examples
/// ```
/// use ufo_sightings::utils::coordinates::parse_coordinate;
///
/// let latitude = parse_coordinate(" 39.5 ").unwrap();
/// assert!((latitude - 39.5).abs() < 1e-9);
/// ```
pub fn parse_coordinate(coord_str: &str) -> Result<f64> {
    let value = coord_str.trim().parse::<f64>().map_err(|_| {
        SightingError::InvalidArgument(format!("Invalid coordinate value: '{}'", coord_str))
    })?;

    if !value.is_finite() {
        return Err(SightingError::InvalidArgument(format!(
            "Coordinate must be finite: '{}'",
            coord_str
        )));
    }

    Ok(value)
}

/// Calculate the distance between two points using the Haversine formula
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points
    let c = 2.0 * a.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Great-circle distance in kilometres between two coordinates
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Round both components to whole degrees, giving a coarse grid cell.
///
/// Values just below zero land in the `0.0` cell, not a separate `-0.0` one.
pub fn round_coordinate(coordinate: &Coordinate) -> Coordinate {
    Coordinate::new(coordinate.latitude.round(), coordinate.longitude.round())
}
