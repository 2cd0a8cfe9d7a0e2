use crate::utils::calendar::MonthNames;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ufo-sightings")]
#[command(about = "Query a UFO sightings CSV file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Configuration file (TOML, YAML or JSON)")]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Sightings CSV file [default: from config]")]
    pub data: Option<PathBuf>,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[arg(long, global = true, value_enum, help = "Month-name table for month keys")]
    pub months: Option<MonthNames>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overview of the loaded dataset
    Summary,

    /// Count sightings on a date (YYYY-MM-DD), or all sightings
    Count {
        #[arg(long)]
        date: Option<String>,
    },

    /// Distinct shapes seen in a set of states
    Shapes {
        #[arg(short, long, value_delimiter = ',', required = true)]
        states: Vec<String>,
    },

    /// Total duration in seconds of the sightings in a state
    Duration {
        #[arg(short, long)]
        state: String,
    },

    /// Sightings within a radius (km) of a point
    Near {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(short, long, help = "Radius in km [default: from config]")]
        radius: Option<f64>,
    },

    /// Longest sighting of a shape
    Longest {
        #[arg(long)]
        shape: String,
    },

    /// Duration and comments of the longest sighting near a point
    LongestNear {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(short, long, help = "Radius in km [default: from config]")]
        radius: Option<f64>,
    },

    /// Sightings between two dates (inclusive), most recent first
    Between {
        #[arg(long, help = "First date (YYYY-MM-DD) [default: unbounded]")]
        from: Option<String>,

        #[arg(long, help = "Last date (YYYY-MM-DD) [default: unbounded]")]
        to: Option<String>,

        #[arg(long, default_value = "20", help = "Rows to print (0 = all)")]
        limit: usize,
    },

    /// Sighting of a year with the longest comment containing a word
    LongestComment {
        #[arg(short, long)]
        year: i32,

        #[arg(short, long)]
        word: String,
    },

    /// Mean days between consecutive sightings
    MeanDays {
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Number of sightings on each date
    ByDate,

    /// Number of sightings per year
    ByYear,

    /// Number of sightings per calendar month
    ByMonth,

    /// Distinct shapes per month
    ShapesByMonth,

    /// Hour of the day with most sightings
    Hour,

    /// Whole-degree coordinates with most sightings
    Location,

    /// Mean comment length per state
    CommentLength,

    /// Percentage of sightings per shape
    ShapeShare,

    /// Longest sightings in each state
    LongestByState {
        #[arg(short = 'n', long, help = "Sightings per state [default: from config]")]
        limit: Option<usize>,
    },

    /// Year with most sightings of a shape
    BusiestYear {
        #[arg(long)]
        shape: String,
    },

    /// States with most sightings
    TopStates {
        #[arg(short = 'n', long, help = "Number of states [default: from config]")]
        limit: Option<usize>,
    },

    /// Total duration per year in a state
    DurationByYear {
        #[arg(short, long)]
        state: String,
    },

    /// Most recent sighting in each state
    MostRecent,
}
