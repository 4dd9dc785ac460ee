pub use crate::designator::InternationalDesignator;
pub use crate::epoch::{epoch_date, expand_two_digit_year, CENTURY_PIVOT};
pub use crate::record::{Classification, NoradId, SatelliteRecord, UnknownClassification};
pub use chrono::NaiveDate;
