//! Turns already line-split TLE text into validated records

use crate::error::{DataLine, Field, ParseError, RecordContext};
use crate::grammar::{self, Line1, Line2};
use crate::{ECCENTRICITY_DIGITS, LINE1_MARKER, LINE2_MARKER};
use std::str::FromStr;
use tletypes::prelude::*;
use tracing::debug;

/// How records are laid out in the input, decided once from the first line
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Framing {
    /// Two data lines per record
    TwoLine,
    /// A title line followed by two data lines
    ThreeLine,
}

impl Framing {
    pub fn detect(first_line: &str) -> Self {
        if first_line.starts_with(LINE1_MARKER) || first_line.starts_with(LINE2_MARKER) {
            Framing::TwoLine
        } else {
            Framing::ThreeLine
        }
    }

    pub fn lines_per_record(self) -> usize {
        match self {
            Framing::TwoLine => 2,
            Framing::ThreeLine => 3,
        }
    }

    /// Split one record's worth of lines, `lines` has exactly `lines_per_record` entries
    fn frame<S: AsRef<str>>(self, lines: &[S]) -> TleLines<'_> {
        match self {
            Framing::TwoLine => TleLines {
                name: None,
                line1: lines[0].as_ref(),
                line2: lines[1].as_ref(),
            },
            Framing::ThreeLine => {
                let name = lines[0].as_ref().trim();
                TleLines {
                    name: (!name.is_empty()).then_some(name),
                    line1: lines[1].as_ref(),
                    line2: lines[2].as_ref(),
                }
            }
        }
    }
}

/// The unparsed lines of one record
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct TleLines<'a> {
    pub name: Option<&'a str>,
    pub line1: &'a str,
    pub line2: &'a str,
}

/// Parse a sequence of non-blank lines into records, in input order.
///
/// Blank lines must already be removed (see [`non_blank_lines`]). Any
/// invalid record aborts the whole parse.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Vec<SatelliteRecord>, ParseError> {
    let first = lines.first().ok_or(ParseError::EmptyInput)?;
    let framing = Framing::detect(first.as_ref());
    let lines_per_record = framing.lines_per_record();
    debug!(?framing, lines = lines.len(), "Parsing TLE lines");

    if lines.len() % lines_per_record != 0 {
        return Err(ParseError::MalformedLineCount {
            lines: lines.len(),
            lines_per_record,
        });
    }

    let records = lines
        .chunks_exact(lines_per_record)
        .enumerate()
        .map(|(index, chunk)| parse_record(index, framing.frame(chunk)))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(records = records.len(), "Parsed TLE records");
    Ok(records)
}

/// Split text on LF or CRLF, dropping lines that are empty or whitespace only
pub fn non_blank_lines(text: &str) -> Vec<&str> {
    text.lines().filter(|l| !l.trim().is_empty()).collect()
}

/// Decode the 7-digit eccentricity field, which has an implied leading "0."
pub fn decode_eccentricity(digits: &str) -> Option<f64> {
    if digits.len() != ECCENTRICITY_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    format!("0.{digits}").parse().ok()
}

fn parse_record(index: usize, tle: TleLines<'_>) -> Result<SatelliteRecord, ParseError> {
    let mut at = RecordContext::new(index, tle.name);

    if !tle.line1.starts_with(LINE1_MARKER) {
        return Err(ParseError::InvalidLinePrefix {
            at,
            line: DataLine::First,
        });
    }
    if !tle.line2.starts_with(LINE2_MARKER) {
        return Err(ParseError::InvalidLinePrefix {
            at,
            line: DataLine::Second,
        });
    }

    let (_, l1) = grammar::line1(tle.line1).map_err(|_| ParseError::LineGrammarMismatch {
        at: at.clone(),
        line: DataLine::First,
    })?;
    let (_, l2) = grammar::line2(tle.line2).map_err(|_| ParseError::LineGrammarMismatch {
        at: at.clone(),
        line: DataLine::Second,
    })?;

    let norad_id: NoradId = convert(&at, Field::NoradId, l1.norad_id)?;
    let line2_norad_id: NoradId = convert(&at, Field::NoradId, l2.norad_id)?;
    if norad_id != line2_norad_id {
        return Err(ParseError::NoradIdMismatch {
            at,
            line1: norad_id,
            line2: line2_norad_id,
        });
    }
    at.norad_id = Some(norad_id);

    record_fields(&at, tle.name, norad_id, &l1, &l2)
}

fn record_fields(
    at: &RecordContext,
    name: Option<&str>,
    norad_id: NoradId,
    l1: &Line1<'_>,
    l2: &Line2<'_>,
) -> Result<SatelliteRecord, ParseError> {
    let classification = Classification::try_from(l1.classification)
        .map_err(|_| field_error(at, Field::Classification))?;

    let epoch_year: u32 = convert(at, Field::EpochYear, l1.epoch_year)?;
    let day_of_year: u32 = convert(at, Field::EpochDay, l1.epoch_day)?;
    let epoch_date =
        epoch_date(epoch_year, day_of_year).ok_or_else(|| ParseError::InvalidEpochDate {
            at: at.clone(),
            year: epoch_year,
            day_of_year,
        })?;

    let eccentricity = decode_eccentricity(l2.eccentricity)
        .ok_or_else(|| field_error(at, Field::Eccentricity))?;

    Ok(SatelliteRecord {
        name: name.map(str::to_owned),
        norad_id,
        classification,
        designator: InternationalDesignator::new(
            l1.launch_year,
            l1.launch_number,
            l1.launch_piece,
        ),
        epoch_date,
        element_set_number: checksummed(at, Field::ElementSetNumber, l1.element_set)?,
        inclination_deg: convert(at, Field::Inclination, l2.inclination)?,
        raan_deg: convert(at, Field::Raan, l2.raan)?,
        eccentricity,
        arg_perigee_deg: convert(at, Field::ArgPerigee, l2.arg_perigee)?,
        mean_anomaly_deg: convert(at, Field::MeanAnomaly, l2.mean_anomaly)?,
        mean_motion_rev_per_day: convert(at, Field::MeanMotion, l2.mean_motion)?,
        revolution_number: checksummed(at, Field::RevolutionNumber, l2.revolution)?,
    })
}

fn field_error(at: &RecordContext, field: Field) -> ParseError {
    ParseError::FieldConversion {
        at: at.clone(),
        field,
    }
}

fn convert<T: FromStr>(at: &RecordContext, field: Field, s: &str) -> Result<T, ParseError> {
    s.parse().map_err(|_| field_error(at, field))
}

/// Number in front of a trailing checksum digit, the checksum itself is ignored.
/// A lone checksum digit means the number was left blank.
fn checksummed(at: &RecordContext, field: Field, s: &str) -> Result<u32, ParseError> {
    let (number, _checksum) = s.split_at(s.len().saturating_sub(1));
    if number.is_empty() {
        Ok(0)
    } else {
        convert(at, field, number)
    }
}
