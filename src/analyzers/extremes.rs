use crate::models::{Coordinate, Sighting};
use crate::utils::coordinates::distance;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Order by duration, then by the natural record order so ties are deterministic
fn by_duration(a: &&Sighting, b: &&Sighting) -> Ordering {
    a.duration.cmp(&b.duration).then_with(|| a.cmp(b))
}

/// Longest sighting of the given shape
pub fn longest_of_shape(sightings: &[Sighting], shape: &str) -> Option<Sighting> {
    sightings
        .iter()
        .filter(|s| s.shape == shape)
        .max_by(by_duration)
        .cloned()
}

/// Duration and comments of the longest sighting strictly within `radius_km` of `point`
pub fn longest_near(
    sightings: &[Sighting],
    point: &Coordinate,
    radius_km: f64,
) -> Option<(u64, String)> {
    sightings
        .iter()
        .filter(|s| distance(&s.location, point) < radius_km)
        .max_by(by_duration)
        .map(|s| (s.duration, s.comments.clone()))
}

/// Sighting from `year` with the longest comment that mentions `word`
pub fn longest_comment(sightings: &[Sighting], year: i32, word: &str) -> Option<Sighting> {
    sightings
        .iter()
        .filter(|s| s.year() == year && s.comments.contains(word))
        .max_by(|a, b| {
            a.comment_length()
                .cmp(&b.comment_length())
                .then_with(|| a.cmp(b))
        })
        .cloned()
}

/// Days elapsed between each pair of consecutive dates
pub fn days_between(dates: &[NaiveDate]) -> Vec<i64> {
    dates
        .windows(2)
        .map(|pair| pair[1].signed_duration_since(pair[0]).num_days())
        .collect()
}

/// Mean gap in days between consecutive sightings, optionally within one year.
///
/// Needs at least two matching sightings.
pub fn mean_days_between(sightings: &[Sighting], year: Option<i32>) -> Option<f64> {
    let mut dates: Vec<NaiveDate> = sightings
        .iter()
        .filter(|s| year.map_or(true, |y| s.year() == y))
        .map(|s| s.date())
        .collect();
    dates.sort();

    let gaps = days_between(&dates);
    if gaps.is_empty() {
        return None;
    }
    Some(gaps.iter().sum::<i64>() as f64 / gaps.len() as f64)
}
