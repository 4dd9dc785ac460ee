//! Parser for NORAD two-line element sets, with or without title lines

pub use crate::error::{DataLine, Field, ParseError, RecordContext};
pub use crate::parser::{decode_eccentricity, non_blank_lines, parse, Framing, TleLines};
pub use tletypes::prelude::*;

pub mod error;
pub mod grammar;
pub mod parser;

pub const LINE1_MARKER: char = '1';
pub const LINE2_MARKER: char = '2';
pub const NORAD_ID_DIGITS: usize = 5;
pub const ECCENTRICITY_DIGITS: usize = 7;
