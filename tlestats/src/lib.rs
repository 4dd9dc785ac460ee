//! Aggregate statistics over a collection of parsed element sets

pub use crate::statistics::{summarize, Statistics};

pub mod statistics;

pub const TOTAL_HEADING: &str = "Total satellites";
pub const OLDEST_EPOCH_HEADING: &str = "Oldest epoch date";
pub const LAUNCHES_BY_YEAR_HEADING: &str = "Launches by year:";
pub const INCLINATION_HEADING: &str = "Satellites by inclination:";
pub const DATE_FORMAT: &str = "%d.%m.%Y";
