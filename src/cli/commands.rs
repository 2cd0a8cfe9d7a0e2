use crate::analyzers::{self, SightingAnalyzer};
use crate::cli::args::{Cli, Commands};
use crate::config::AppConfig;
use crate::error::{Result, SightingError};
use crate::models::{Coordinate, Sighting};
use crate::readers::SightingReader;
use crate::utils::calendar::parse_date;
use crate::utils::progress::ProgressReporter;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(months) = cli.months {
        config.month_names = months;
    }
    debug!(?config, "Resolved configuration");

    let progress = ProgressReporter::new_spinner("Loading sightings...", cli.json);
    let sightings = SightingReader::new()
        .read_sightings_with_progress(&config.data_file, Some(&progress))?;
    progress.finish_with_message(&format!("Loaded {} sightings", sightings.len()));

    execute(cli.command, &sightings, &config, cli.json)
}

/// Install the tracing subscriber; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose {
        "ufo_sightings=debug"
    } else {
        "ufo_sightings=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let installed = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| SightingError::Logging(e.to_string()))
}

/// Run one query against an already loaded dataset and print the result
pub fn execute(
    command: Commands,
    sightings: &[Sighting],
    config: &AppConfig,
    json: bool,
) -> Result<()> {
    let names = config.month_names;

    match command {
        Commands::Summary => {
            let summary = SightingAnalyzer::new().summarize(sightings)?;
            emit(json, &summary, |s| s.summary())
        }

        Commands::Count { date } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let count = analyzers::count_on_date(sightings, date);
            emit(json, &count, |c| match date {
                Some(d) => format!("{} sightings on {}", c, d),
                None => format!("{} sightings in total", c),
            })
        }

        Commands::Shapes { states } => {
            let states: HashSet<String> = states.into_iter().collect();
            let shapes = analyzers::shapes_in_states(sightings, &states);
            emit(json, &shapes, |shapes| {
                let listed: Vec<&str> = shapes.iter().map(String::as_str).collect();
                format!("{} distinct shapes: {}", shapes.len(), listed.join(", "))
            })
        }

        Commands::Duration { state } => {
            let total = analyzers::total_duration(sightings, &state);
            emit(json, &total, |t| format!("{}: {} seconds in total", state, t))
        }

        Commands::Near { lat, lon, radius } => {
            let point = Coordinate::checked(lat, lon)?;
            let radius = radius_or_default(radius, config)?;
            let near = analyzers::sightings_near(sightings, &point, radius);
            emit(json, &near, |near| {
                let mut lines = vec![format!(
                    "{} sightings within {} km of {}",
                    near.len(),
                    radius,
                    point
                )];
                lines.extend(near.iter().map(describe));
                lines.join("\n")
            })
        }

        Commands::Longest { shape } => {
            let longest = analyzers::longest_of_shape(sightings, &shape);
            emit(json, &longest, |longest| match longest {
                Some(s) => describe(s),
                None => format!("No sightings with shape '{}'", shape),
            })
        }

        Commands::LongestNear { lat, lon, radius } => {
            let point = Coordinate::checked(lat, lon)?;
            let radius = radius_or_default(radius, config)?;
            let longest = analyzers::longest_near(sightings, &point, radius);
            emit(json, &longest, |longest| match longest {
                Some((duration, comments)) => format!("{} s: {}", duration, comments),
                None => format!("No sightings within {} km of {}", radius, point),
            })
        }

        Commands::Between { from, to, limit } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            let mut selected = analyzers::sightings_between(sightings, from, to);
            let total = selected.len();
            if limit > 0 {
                selected.truncate(limit);
            }
            emit(json, &selected, |selected| {
                let mut lines = vec![format!(
                    "{} sightings in range (showing {})",
                    total,
                    selected.len()
                )];
                lines.extend(selected.iter().map(describe));
                lines.join("\n")
            })
        }

        Commands::LongestComment { year, word } => {
            let found = analyzers::longest_comment(sightings, year, &word);
            emit(json, &found, |found| match found {
                Some(s) => describe(s),
                None => format!("No {} sightings mention '{}'", year, word),
            })
        }

        Commands::MeanDays { year } => {
            let mean = analyzers::mean_days_between(sightings, year);
            emit(json, &mean, |mean| match mean {
                Some(days) => format!("{:.2} days between consecutive sightings", days),
                None => "Not enough sightings to compute an interval".to_string(),
            })
        }

        Commands::ByDate => {
            let counts: BTreeMap<_, usize> = analyzers::sightings_by_date(sightings)
                .into_iter()
                .map(|(date, group)| (date, group.len()))
                .collect();
            emit(json, &counts, |counts| table(counts))
        }

        Commands::ByYear => {
            let counts = analyzers::count_by_year(sightings);
            emit(json, &counts, |counts| table(counts))
        }

        Commands::ByMonth => {
            let counts = analyzers::count_by_month(sightings, names);
            emit(json, &names.in_calendar_order(&counts), |ordered| {
                ordered
                    .iter()
                    .map(|(month, count)| format!("{}: {}", month, count))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }

        Commands::ShapesByMonth => {
            let by_month = analyzers::shapes_by_month(sightings, names);
            emit(json, &names.in_calendar_order(&by_month), |ordered| {
                ordered
                    .iter()
                    .map(|(month, shapes)| {
                        let listed: Vec<&str> = shapes.iter().map(String::as_str).collect();
                        format!("{}: {}", month, listed.join(", "))
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }

        Commands::Hour => {
            let hour = analyzers::busiest_hour(sightings);
            emit(json, &hour, |hour| match hour {
                Some(h) => format!("Most sightings at {:02}:00", h),
                None => "No sightings".to_string(),
            })
        }

        Commands::Location => {
            let cell = analyzers::busiest_location(sightings);
            emit(json, &cell, |cell| match cell {
                Some(c) => format!("Most sightings around {}", c),
                None => "No sightings".to_string(),
            })
        }

        Commands::CommentLength => {
            let means = analyzers::mean_comment_length_by_state(sightings);
            emit(json, &means, |means| {
                means
                    .iter()
                    .map(|(state, mean)| format!("{}: {:.2}", state, mean))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }

        Commands::ShapeShare => {
            let shares = analyzers::shape_percentages(sightings);
            emit(json, &shares, |shares| {
                shares
                    .iter()
                    .map(|(shape, pct)| format!("{}: {:.2}%", shape, pct))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }

        Commands::LongestByState { limit } => {
            let n = positive_or_default(limit, config.per_state)?;
            let longest = analyzers::longest_by_state(sightings, n);
            emit(json, &longest, |longest| {
                let mut lines = Vec::new();
                for (state, group) in longest {
                    lines.push(format!("{}:", state));
                    lines.extend(group.iter().map(|s| format!("  {}", describe(s))));
                }
                lines.join("\n")
            })
        }

        Commands::BusiestYear { shape } => {
            let year = analyzers::busiest_year_for_shape(sightings, &shape);
            emit(json, &year, |year| match year {
                Some(y) => format!("Most '{}' sightings in {}", shape, y),
                None => format!("No sightings with shape '{}'", shape),
            })
        }

        Commands::TopStates { limit } => {
            let n = positive_or_default(limit, config.top_n)?;
            let top = analyzers::top_states(sightings, n);
            emit(json, &top, |top| {
                top.iter()
                    .enumerate()
                    .map(|(i, (state, count))| format!("{}. {}: {}", i + 1, state, count))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }

        Commands::DurationByYear { state } => {
            let totals = analyzers::duration_by_year(sightings, &state);
            emit(json, &totals, |totals| table(totals))
        }

        Commands::MostRecent => {
            let latest = analyzers::most_recent_by_state(sightings);
            emit(json, &latest, |latest| table(latest))
        }
    }
}

fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", text(value));
    }
    Ok(())
}

fn table<K: std::fmt::Display, V: std::fmt::Display>(map: &BTreeMap<K, V>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}: {}", key, value))
        .collect::<Vec<_>>()
        .join("\n")
}

fn describe(sighting: &Sighting) -> String {
    format!(
        "{} {}, {} [{}] {} s: {}",
        sighting.timestamp,
        sighting.city,
        sighting.state,
        sighting.shape,
        sighting.duration,
        sighting.comments
    )
}

fn radius_or_default(radius: Option<f64>, config: &AppConfig) -> Result<f64> {
    let radius = radius.unwrap_or(config.radius_km);
    if !radius.is_finite() || radius < 0.0 {
        return Err(SightingError::InvalidArgument(format!(
            "Radius must be a non-negative number of km, got: {}",
            radius
        )));
    }
    Ok(radius)
}

fn positive_or_default(value: Option<usize>, default: usize) -> Result<usize> {
    match value.unwrap_or(default) {
        0 => Err(SightingError::InvalidArgument(
            "Count must be at least 1".to_string(),
        )),
        n => Ok(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::fixtures::dataset;

    #[test]
    fn test_execute_queries() {
        let sightings = dataset();
        let config = AppConfig::default();

        assert!(execute(Commands::Summary, &sightings, &config, false).is_ok());
        assert!(execute(Commands::ByMonth, &sightings, &config, true).is_ok());
        assert!(execute(Commands::ShapesByMonth, &sightings, &config, true).is_ok());
        assert!(execute(Commands::ByDate, &sightings, &config, true).is_ok());
        assert!(execute(
            Commands::Count {
                date: Some("2020-01-01".to_string())
            },
            &sightings,
            &config,
            false
        )
        .is_ok());
    }

    #[test]
    fn test_execute_rejects_bad_arguments() {
        let sightings = dataset();
        let config = AppConfig::default();

        let bad_date = execute(
            Commands::Count {
                date: Some("yesterday".to_string()),
            },
            &sightings,
            &config,
            false,
        );
        assert!(matches!(bad_date, Err(SightingError::InvalidArgument(_))));

        let bad_radius = execute(
            Commands::Near {
                lat: 39.5,
                lon: -119.8,
                radius: Some(-1.0),
            },
            &sightings,
            &config,
            false,
        );
        assert!(matches!(bad_radius, Err(SightingError::InvalidArgument(_))));

        let bad_point = execute(
            Commands::LongestNear {
                lat: 95.0,
                lon: 0.0,
                radius: None,
            },
            &sightings,
            &config,
            false,
        );
        assert!(matches!(bad_point, Err(SightingError::Validation(_))));

        let zero_states = execute(
            Commands::TopStates { limit: Some(0) },
            &sightings,
            &config,
            false,
        );
        assert!(matches!(zero_states, Err(SightingError::InvalidArgument(_))));
    }

    #[test]
    fn test_summary_of_empty_dataset_fails() {
        let result = execute(Commands::Summary, &[], &AppConfig::default(), false);
        assert!(matches!(result, Err(SightingError::EmptyDataset)));
    }
}
