use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::Coordinate;

/// One reported sighting.
///
/// Plain data: equality is structural and the derived ordering compares
/// fields in declaration order, so the timestamp decides first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Sighting {
    pub timestamp: NaiveDateTime,
    pub city: String,
    pub state: String,
    pub shape: String,
    /// Seconds
    pub duration: u64,
    pub comments: String,
    pub location: Coordinate,
}

impl Sighting {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: NaiveDateTime,
        city: String,
        state: String,
        shape: String,
        duration: u64,
        comments: String,
        location: Coordinate,
    ) -> Self {
        Self {
            timestamp,
            city,
            state,
            shape,
            duration,
            comments,
            location,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Calendar month, 1-12
    pub fn month(&self) -> u32 {
        self.timestamp.month()
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Comment length in characters, not bytes
    pub fn comment_length(&self) -> usize {
        self.comments.chars().count()
    }
}
