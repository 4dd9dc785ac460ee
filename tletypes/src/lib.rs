pub mod designator;
pub mod epoch;
pub mod prelude;
pub mod record;
