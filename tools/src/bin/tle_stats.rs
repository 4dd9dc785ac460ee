use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tlestats::Statistics;
use tools_lib::load_records;
use tracing::info;

/// Print statistics for a TLE catalog
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Also save the report to this file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Print the statistics as JSON instead of the text report
    #[arg(long)]
    json: bool,

    /// TLE file to read, '-' for stdin
    input: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let opts = Opts::parse();

    let records = load_records(&opts.input)?;
    let stats = Statistics::from_records(&records);
    let report = stats.to_string();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        println!("{report}");
    }

    if let Some(path) = &opts.output {
        fs::write(path, &report)?;
        info!(path = %path.display(), "Saved statistics report");
    }

    Ok(())
}
