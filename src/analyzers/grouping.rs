use crate::models::Sighting;
use crate::utils::calendar::MonthNames;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};

fn month_name(names: MonthNames, sighting: &Sighting) -> &'static str {
    names.table()[sighting.timestamp.month0() as usize]
}

/// Sightings indexed by calendar date
pub fn sightings_by_date(sightings: &[Sighting]) -> BTreeMap<NaiveDate, BTreeSet<Sighting>> {
    let mut by_date: BTreeMap<NaiveDate, BTreeSet<Sighting>> = BTreeMap::new();
    for sighting in sightings {
        by_date
            .entry(sighting.date())
            .or_default()
            .insert(sighting.clone());
    }
    by_date
}

/// Distinct shapes seen in each month; only months with sightings appear
pub fn shapes_by_month(
    sightings: &[Sighting],
    names: MonthNames,
) -> BTreeMap<&'static str, BTreeSet<String>> {
    let mut by_month: BTreeMap<&'static str, BTreeSet<String>> = BTreeMap::new();
    for sighting in sightings {
        by_month
            .entry(month_name(names, sighting))
            .or_default()
            .insert(sighting.shape.clone());
    }
    by_month
}

pub fn count_by_year(sightings: &[Sighting]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for sighting in sightings {
        *counts.entry(sighting.year()).or_insert(0) += 1;
    }
    counts
}

/// Sightings per month. All twelve months are present, empty ones as 0.
pub fn count_by_month(sightings: &[Sighting], names: MonthNames) -> BTreeMap<&'static str, usize> {
    let mut counts: BTreeMap<&'static str, usize> =
        names.table().iter().map(|name| (*name, 0)).collect();
    for sighting in sightings {
        *counts.entry(month_name(names, sighting)).or_insert(0) += 1;
    }
    counts
}

/// Sightings grouped by state, file order kept inside each group
pub fn group_by_state(sightings: &[Sighting]) -> BTreeMap<&str, Vec<&Sighting>> {
    let mut groups: BTreeMap<&str, Vec<&Sighting>> = BTreeMap::new();
    for sighting in sightings {
        groups.entry(sighting.state.as_str()).or_default().push(sighting);
    }
    groups
}

fn mean_length<'a>(sightings: impl IntoIterator<Item = &'a Sighting>) -> Option<f64> {
    let (total, count) = sightings
        .into_iter()
        .fold((0usize, 0usize), |(total, count), s| {
            (total + s.comment_length(), count + 1)
        });
    if count == 0 {
        None
    } else {
        Some(total as f64 / count as f64)
    }
}

/// Mean comment length in characters
pub fn mean_comment_length(sightings: &[Sighting]) -> Option<f64> {
    mean_length(sightings)
}

pub fn mean_comment_length_by_state(sightings: &[Sighting]) -> BTreeMap<String, f64> {
    group_by_state(sightings)
        .into_iter()
        .filter_map(|(state, group)| {
            mean_length(group.into_iter()).map(|mean| (state.to_string(), mean))
        })
        .collect()
}

/// Share of sightings per shape, as a percentage of the whole dataset
pub fn shape_percentages(sightings: &[Sighting]) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sighting in sightings {
        *counts.entry(sighting.shape.as_str()).or_insert(0) += 1;
    }

    let total = sightings.len() as f64;
    counts
        .into_iter()
        .map(|(shape, count)| (shape.to_string(), count as f64 / total * 100.0))
        .collect()
}

/// Up to `n` longest sightings per state, longest first.
///
/// Equal durations keep their file order.
pub fn longest_by_state(sightings: &[Sighting], n: usize) -> BTreeMap<String, Vec<Sighting>> {
    group_by_state(sightings)
        .into_iter()
        .map(|(state, mut group)| {
            group.sort_by(|a, b| b.duration.cmp(&a.duration));
            let top = group.into_iter().take(n).cloned().collect();
            (state.to_string(), top)
        })
        .collect()
}

/// Total duration per year for one state
pub fn duration_by_year(sightings: &[Sighting], state: &str) -> BTreeMap<i32, u64> {
    let mut totals = BTreeMap::new();
    for sighting in sightings.iter().filter(|s| s.state == state) {
        *totals.entry(sighting.year()).or_insert(0) += sighting.duration;
    }
    totals
}

/// Timestamp of the latest sighting in each state
pub fn most_recent_by_state(sightings: &[Sighting]) -> BTreeMap<String, NaiveDateTime> {
    let mut latest: BTreeMap<String, NaiveDateTime> = BTreeMap::new();
    for sighting in sightings {
        latest
            .entry(sighting.state.clone())
            .and_modify(|ts| *ts = (*ts).max(sighting.timestamp))
            .or_insert(sighting.timestamp);
    }
    latest
}
