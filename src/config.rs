use crate::error::Result;
use crate::utils::calendar::MonthNames;
use crate::utils::constants::{
    DEFAULT_DATA_FILE, DEFAULT_PER_STATE, DEFAULT_RADIUS_KM, DEFAULT_TOP_STATES, ENV_PREFIX,
};
use ::config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

/// Settings for the command-line front-end.
///
/// Layered as built-in defaults, then an optional config file, then
/// `UFO_*` environment variables (e.g. `UFO_RADIUS_KM=2.5`).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AppConfig {
    pub data_file: PathBuf,

    #[validate(range(min = 0.0))]
    pub radius_km: f64,

    #[validate(range(min = 1))]
    pub top_n: usize,

    #[validate(range(min = 1))]
    pub per_state: usize,

    pub month_names: MonthNames,
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("data_file", DEFAULT_DATA_FILE)?
            .set_default("radius_km", DEFAULT_RADIUS_KM)?
            .set_default("top_n", DEFAULT_TOP_STATES as i64)?
            .set_default("per_state", DEFAULT_PER_STATE as i64)?
            .set_default("month_names", "english")?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: AppConfig = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            radius_km: DEFAULT_RADIUS_KM,
            top_n: DEFAULT_TOP_STATES,
            per_state: DEFAULT_PER_STATE,
            month_names: MonthNames::default(),
        }
    }
}
