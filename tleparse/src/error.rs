use derive_more::Display;
use std::fmt;
use tletypes::prelude::NoradId;

/// Everything that can abort a parse. The first failing record wins.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No TLE lines to parse")]
    EmptyInput,

    #[error("Incorrect number of TLE lines ({lines}), expected a multiple of {lines_per_record}")]
    MalformedLineCount {
        lines: usize,
        lines_per_record: usize,
    },

    #[error("Line {line} of {at} does not start with '{line}'")]
    InvalidLinePrefix { at: RecordContext, line: DataLine },

    #[error("Line {line} of {at} does not match the TLE format")]
    LineGrammarMismatch { at: RecordContext, line: DataLine },

    #[error("NORAD id mismatch in {at}: line 1 has {line1}, line 2 has {line2}")]
    NoradIdMismatch {
        at: RecordContext,
        line1: NoradId,
        line2: NoradId,
    },

    #[error("Error parsing {field} of {at}")]
    FieldConversion { at: RecordContext, field: Field },

    #[error("Invalid epoch date (year {year}, day {day_of_year}) of {at}")]
    InvalidEpochDate {
        at: RecordContext,
        year: u32,
        day_of_year: u32,
    },
}

impl ParseError {
    /// The record that caused the error, if the error is about a single record
    pub fn record(&self) -> Option<&RecordContext> {
        use ParseError::*;
        match self {
            EmptyInput | MalformedLineCount { .. } => None,
            InvalidLinePrefix { at, .. }
            | LineGrammarMismatch { at, .. }
            | NoradIdMismatch { at, .. }
            | FieldConversion { at, .. }
            | InvalidEpochDate { at, .. } => Some(at),
        }
    }
}

/// Identifies a record within the input
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordContext {
    /// 0-based position of the record in the input
    pub index: usize,
    pub name: Option<String>,
    /// Known once both data lines agree on it
    pub norad_id: Option<NoradId>,
}

impl RecordContext {
    pub fn new(index: usize, name: Option<&str>) -> Self {
        Self {
            index,
            name: name.map(str::to_owned),
            norad_id: None,
        }
    }
}

impl fmt::Display for RecordContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record {}", self.index)?;
        if let Some(name) = &self.name {
            write!(f, " '{name}'")?;
        }
        if let Some(id) = self.norad_id {
            write!(f, " (NORAD {id})")?;
        }
        Ok(())
    }
}

/// Which of the two data lines
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum DataLine {
    #[display(fmt = "1")]
    First,
    #[display(fmt = "2")]
    Second,
}

/// Fields converted after the grammar matched
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "NORAD id")]
    NoradId,
    #[display(fmt = "classification")]
    Classification,
    #[display(fmt = "epoch year")]
    EpochYear,
    #[display(fmt = "epoch day")]
    EpochDay,
    #[display(fmt = "element set number")]
    ElementSetNumber,
    #[display(fmt = "inclination")]
    Inclination,
    #[display(fmt = "right ascension of the ascending node")]
    Raan,
    #[display(fmt = "eccentricity")]
    Eccentricity,
    #[display(fmt = "argument of perigee")]
    ArgPerigee,
    #[display(fmt = "mean anomaly")]
    MeanAnomaly,
    #[display(fmt = "mean motion")]
    MeanMotion,
    #[display(fmt = "revolution number")]
    RevolutionNumber,
}
