//! Input handling shared by the command line tools

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tleparse::{non_blank_lines, parse, SatelliteRecord};
use tracing::{debug, info};

/// Path argument meaning standard input
pub const STDIN_PATH: &str = "-";

/// Read a TLE file, or stdin when `path` is [`STDIN_PATH`]
pub fn read_input(path: &Path) -> io::Result<String> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading TLE data from stdin");
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        debug!(path = %path.display(), "Reading TLE data");
        fs::read_to_string(path)
    }
}

/// Read and parse every record from `path`
pub fn load_records(path: &Path) -> Result<Vec<SatelliteRecord>, Box<dyn std::error::Error>> {
    let text = read_input(path)?;
    let records = parse_text(&text)?;
    info!(records = records.len(), path = %path.display(), "Loaded TLE records");
    Ok(records)
}

/// Parse raw text, blank lines are skipped
pub fn parse_text(text: &str) -> Result<Vec<SatelliteRecord>, tleparse::ParseError> {
    parse(&non_blank_lines(text))
}
