use crate::models::{Coordinate, Sighting};
use crate::utils::coordinates::round_coordinate;
use std::collections::{BTreeMap, HashMap};

/// Most frequent key; ties go to the smallest key
fn mode<K: Ord + Copy>(counts: &BTreeMap<K, usize>) -> Option<K> {
    let mut best: Option<(K, usize)> = None;
    for (&key, &count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((key, count)),
        }
    }
    best.map(|(key, _)| key)
}

fn frequencies<K: Ord>(keys: impl Iterator<Item = K>) -> BTreeMap<K, usize> {
    let mut counts = BTreeMap::new();
    for key in keys {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

/// The `n` states with most sightings, highest count first.
///
/// States with equal counts keep the order in which they first appear in the
/// data. Fewer than `n` states are returned as-is, never padded.
pub fn top_states(sightings: &[Sighting], n: usize) -> Vec<(String, usize)> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for sighting in sightings {
        let count = counts.entry(sighting.state.as_str()).or_insert_with(|| {
            first_seen.push(sighting.state.as_str());
            0
        });
        *count += 1;
    }

    let mut ranked: Vec<(String, usize)> = first_seen
        .into_iter()
        .map(|state| (state.to_string(), counts[state]))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// Year with the most sightings of `shape`; ties go to the earliest year
pub fn busiest_year_for_shape(sightings: &[Sighting], shape: &str) -> Option<i32> {
    let counts = frequencies(
        sightings
            .iter()
            .filter(|s| s.shape == shape)
            .map(|s| s.year()),
    );
    mode(&counts)
}

/// Hour of day (0-23) with the most sightings; ties go to the earliest hour
pub fn busiest_hour(sightings: &[Sighting]) -> Option<u32> {
    mode(&frequencies(sightings.iter().map(|s| s.hour())))
}

/// Whole-degree cell with the most sightings; ties go to the smallest cell
pub fn busiest_location(sightings: &[Sighting]) -> Option<Coordinate> {
    mode(&frequencies(
        sightings.iter().map(|s| round_coordinate(&s.location)),
    ))
}
