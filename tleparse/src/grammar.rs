//! Fixed positional grammar for the two data lines of an element set
//!
//! Fields are captured as borrowed slices, conversion happens in the parser.

use crate::{ECCENTRICITY_DIGITS, LINE1_MARKER, LINE2_MARKER, NORAD_ID_DIGITS};
use nom::{
    bytes::complete::{take_while1, take_while_m_n},
    character::complete::{char, one_of, satisfy, space0, space1},
    combinator::{eof, opt, recognize, verify},
    sequence::{pair, tuple},
};

pub type Result<I, O, E = nom::error::Error<I>> = std::result::Result<(I, O), nom::Err<E>>;

/// Captures of line 1
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Line1<'a> {
    pub norad_id: &'a str,
    pub classification: char,
    pub launch_year: &'a str,
    pub launch_number: &'a str,
    pub launch_piece: &'a str,
    pub epoch_year: &'a str,
    pub epoch_day: &'a str,
    /// Including the leading '.'
    pub epoch_fraction: &'a str,
    pub mean_motion_dot: &'a str,
    pub mean_motion_ddot: &'a str,
    pub bstar: &'a str,
    pub ephemeris_type: char,
    /// Element set number followed by the checksum digit
    pub element_set: &'a str,
}

/// Captures of line 2
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Line2<'a> {
    pub norad_id: &'a str,
    pub inclination: &'a str,
    pub raan: &'a str,
    /// Digits only, the leading "0." is implied
    pub eccentricity: &'a str,
    pub arg_perigee: &'a str,
    pub mean_anomaly: &'a str,
    pub mean_motion: &'a str,
    /// Revolution number followed by the checksum digit
    pub revolution: &'a str,
}

/// `1 NNNNNC YYLLLPPP YYDDD.FFFFFFFF +.DDDDDDDD +DDDDD-D +DDDDD-D E NNNNC`
pub fn line1(s: &str) -> Result<&str, Line1<'_>> {
    let (s, _) = char(LINE1_MARKER)(s)?;
    let (s, _) = space1(s)?;
    let (s, norad_id) = digits(NORAD_ID_DIGITS)(s)?;
    let (s, classification) = satisfy(|c| c.is_ascii_alphabetic())(s)?;
    let (s, _) = space1(s)?;
    let (s, launch_year) = digits(2)(s)?;
    let (s, launch_number) = digits(3)(s)?;
    let (s, launch_piece) = take_while_m_n(0, 3, |c: char| c.is_ascii_alphabetic())(s)?;
    let (s, _) = space1(s)?;
    let (s, epoch_year) = digits(2)(s)?;
    let (s, epoch_day) = digits(3)(s)?;
    let (s, epoch_fraction) = recognize(pair(char('.'), digits(8)))(s)?;
    let (s, _) = space1(s)?;
    let (s, mean_motion_dot) = free_numeric(s)?;
    let (s, _) = space1(s)?;
    let (s, mean_motion_ddot) = free_numeric(s)?;
    let (s, _) = space1(s)?;
    let (s, bstar) = free_numeric(s)?;
    let (s, _) = space1(s)?;
    let (s, ephemeris_type) = satisfy(|c| c.is_ascii_digit())(s)?;
    let (s, _) = space1(s)?;
    let (s, element_set) = take_while_m_n(1, 5, is_digit)(s)?;
    let (s, _) = end_of_line(s)?;
    Ok((
        s,
        Line1 {
            norad_id,
            classification,
            launch_year,
            launch_number,
            launch_piece,
            epoch_year,
            epoch_day,
            epoch_fraction,
            mean_motion_dot,
            mean_motion_ddot,
            bstar,
            ephemeris_type,
            element_set,
        },
    ))
}

/// `2 NNNNN III.IIII RRR.RRRR EEEEEEE PPP.PPPP AAA.AAAA MM.MMMMMMMMRRRRRC`
pub fn line2(s: &str) -> Result<&str, Line2<'_>> {
    let (s, _) = char(LINE2_MARKER)(s)?;
    let (s, _) = space1(s)?;
    let (s, norad_id) = digits(NORAD_ID_DIGITS)(s)?;
    let (s, _) = space1(s)?;
    let (s, inclination) = angle(s)?;
    let (s, _) = space1(s)?;
    let (s, raan) = angle(s)?;
    let (s, _) = space1(s)?;
    let (s, eccentricity) = digits(ECCENTRICITY_DIGITS)(s)?;
    let (s, _) = space1(s)?;
    let (s, arg_perigee) = angle(s)?;
    let (s, _) = space1(s)?;
    let (s, mean_anomaly) = angle(s)?;
    let (s, _) = space1(s)?;
    let (s, mean_motion) = decimal(3, 8)(s)?;
    let (s, _) = space0(s)?;
    let (s, revolution) = take_while_m_n(2, 6, is_digit)(s)?;
    let (s, _) = end_of_line(s)?;
    Ok((
        s,
        Line2 {
            norad_id,
            inclination,
            raan,
            eccentricity,
            arg_perigee,
            mean_anomaly,
            mean_motion,
            revolution,
        },
    ))
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn digits<'a>(count: usize) -> impl FnMut(&'a str) -> Result<&'a str, &'a str> {
    take_while_m_n(count, count, is_digit)
}

/// One to `max_int_digits` digits, a '.', then exactly `frac_digits` digits
fn decimal<'a>(
    max_int_digits: usize,
    frac_digits: usize,
) -> impl FnMut(&'a str) -> Result<&'a str, &'a str> {
    recognize(tuple((
        take_while_m_n(1, max_int_digits, is_digit),
        char('.'),
        take_while_m_n(frac_digits, frac_digits, is_digit),
    )))
}

fn angle(s: &str) -> Result<&str, &str> {
    decimal(3, 4)(s)
}

/// Derivative and drag terms, e.g. `-.00002182`, `00000-0`, `-11606-4`
///
/// Optional sign, a mantissa of digits with at most one '.', then an optional
/// signed single-digit exponent.
fn free_numeric(s: &str) -> Result<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        mantissa,
        opt(pair(one_of("+-"), satisfy(|c| c.is_ascii_digit()))),
    )))(s)
}

fn mantissa(s: &str) -> Result<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |m: &str| m.bytes().any(|b| b.is_ascii_digit()) && m.matches('.').count() <= 1,
    )(s)
}

fn end_of_line(s: &str) -> Result<&str, &str> {
    let (s, _) = space0(s)?;
    eof(s)
}
