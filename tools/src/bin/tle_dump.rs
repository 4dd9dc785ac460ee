use clap::Parser;
use std::io::{self, prelude::*};
use std::path::PathBuf;
use tools_lib::load_records;

/// Print every record of a TLE catalog, one per line
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Print records as JSON lines
    #[arg(long)]
    json: bool,

    /// TLE file to read, '-' for stdin
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let opts = Opts::parse();

    let records = load_records(&opts.input)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for sat in records.iter() {
        if opts.json {
            writeln!(&mut out, "{}", serde_json::to_string(sat)?)?;
        } else {
            writeln!(&mut out, "{} {}", sat.label(), sat)?;
        }
    }

    Ok(())
}
