//! Queries over a loaded slice of sightings.
//!
//! Every function borrows the dataset, never mutates it, and returns a fresh
//! value. "No result" is always `None`, never a sentinel number.

pub mod extremes;
pub mod filters;
pub mod grouping;
pub mod rankings;
pub mod summary;

pub use extremes::{
    days_between, longest_comment, longest_near, longest_of_shape, mean_days_between,
};
pub use filters::{
    count_on_date, count_shapes_in_states, date_in_range, shapes_in_states, sightings_between,
    sightings_near, total_duration,
};
pub use grouping::{
    count_by_month, count_by_year, duration_by_year, group_by_state, longest_by_state,
    mean_comment_length, mean_comment_length_by_state, most_recent_by_state, shape_percentages,
    shapes_by_month, sightings_by_date,
};
pub use rankings::{busiest_hour, busiest_location, busiest_year_for_shape, top_states};
pub use summary::{DatasetSummary, SightingAnalyzer};
