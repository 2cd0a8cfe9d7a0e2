pub mod calendar;
pub mod constants;
pub mod coordinates;
pub mod progress;

pub use calendar::{parse_date, CalendarOrder, MonthNames};
pub use constants::*;
pub use coordinates::{distance, haversine_distance, round_coordinate};
pub use progress::ProgressReporter;
