use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use validator::Validate;

use crate::error::{Result, SightingError};

/// A latitude/longitude pair in decimal degrees.
///
/// Equality, hashing and ordering work on the exact float values (via
/// `total_cmp` and the bit pattern), so coordinates can live in sets and
/// serve as map keys. `-0.0` and `0.0` are the same value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct Coordinate {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: canonical(latitude),
            longitude: canonical(longitude),
        }
    }

    /// Check a user-supplied point before it is used as a query centre
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(SightingError::InvalidArgument(format!(
                "Coordinate must be finite, got ({}, {})",
                latitude, longitude
            )));
        }
        let coordinate = Self::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }
}

/// Fold `-0.0` into `0.0`; every other value is unchanged
fn canonical(value: f64) -> f64 {
    value + 0.0
}

impl PartialEq for Coordinate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Coordinate {}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        canonical(self.latitude)
            .total_cmp(&canonical(other.latitude))
            .then_with(|| canonical(self.longitude).total_cmp(&canonical(other.longitude)))
    }
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical(self.latitude).to_bits().hash(state);
        canonical(self.longitude).to_bits().hash(state);
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}
