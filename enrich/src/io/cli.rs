use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// GeoJSON file containing the coastline
    #[arg(short, long, value_name = "FILE")]
    pub boundary_file: PathBuf,
    /// CSV table with a header row
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Defaults to `<input stem>_enriched.csv` next to the input file
    #[arg(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}
