/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Timestamp layout of the sightings file, e.g. `10/10/1949 20:30`
pub const SIGHTING_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M";

/// Date layout accepted for query arguments
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Fields per data row: datetime, city, state, shape, duration, comments, latitude, longitude
pub const SIGHTING_FIELD_COUNT: usize = 8;

/// Query defaults
pub const DEFAULT_RADIUS_KM: f64 = 0.5;
pub const DEFAULT_TOP_STATES: usize = 5;
pub const DEFAULT_PER_STATE: usize = 3;

/// Default data file and environment prefix for configuration
pub const DEFAULT_DATA_FILE: &str = "data/ovnis.csv";
pub const ENV_PREFIX: &str = "UFO";

pub const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const SPANISH_MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];
