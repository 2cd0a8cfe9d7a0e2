use crate::models::{Coordinate, Sighting};
use crate::utils::coordinates::distance;
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

/// Number of sightings whose date (time of day ignored) equals `date`.
///
/// `None` matches every sighting.
pub fn count_on_date(sightings: &[Sighting], date: Option<NaiveDate>) -> usize {
    sightings
        .iter()
        .filter(|s| date.map_or(true, |d| s.date() == d))
        .count()
}

/// Distinct shapes seen in any of the given states
pub fn shapes_in_states(sightings: &[Sighting], states: &HashSet<String>) -> BTreeSet<String> {
    sightings
        .iter()
        .filter(|s| states.contains(&s.state))
        .map(|s| s.shape.clone())
        .collect()
}

pub fn count_shapes_in_states(sightings: &[Sighting], states: &HashSet<String>) -> usize {
    shapes_in_states(sightings, states).len()
}

/// Total duration in seconds of the sightings in `state`; 0 when there are none
pub fn total_duration(sightings: &[Sighting], state: &str) -> u64 {
    sightings
        .iter()
        .filter(|s| s.state == state)
        .map(|s| s.duration)
        .sum()
}

/// Sightings strictly closer than `radius_km` to `point`.
///
/// Identical records collapse into one set member.
pub fn sightings_near(
    sightings: &[Sighting],
    point: &Coordinate,
    radius_km: f64,
) -> BTreeSet<Sighting> {
    sightings
        .iter()
        .filter(|s| distance(&s.location, point) < radius_km)
        .cloned()
        .collect()
}

/// Whether `date` lies in `[from, to]`; a missing bound is unlimited
pub fn date_in_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let from = from.unwrap_or(NaiveDate::MIN);
    let to = to.unwrap_or(NaiveDate::MAX);
    from <= date && date <= to
}

/// Sightings dated between `from` and `to` (both inclusive), most recent first
pub fn sightings_between(
    sightings: &[Sighting],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Sighting> {
    let mut selected: Vec<Sighting> = sightings
        .iter()
        .filter(|s| date_in_range(s.date(), from, to))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.cmp(a));
    selected
}
