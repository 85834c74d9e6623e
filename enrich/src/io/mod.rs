use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::EPOCH;

pub mod cli;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).context(format!("could not open file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context(format!("could not parse file: {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path).context(format!("could not create file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json).context(format!("could not write file: {}", path.display()))?;
    info!("[IO] json written to {}", path.display());
    Ok(())
}

/// CSV reader which accepts records with a different number of fields than the header
pub fn table_reader<R: Read>(rdr: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().flexible(true).from_reader(rdr)
}

pub fn open_table(path: &Path) -> Result<csv::Reader<File>> {
    let file = File::open(path).context(format!("could not open input table: {}", path.display()))?;
    Ok(table_reader(file))
}

pub fn create_table(path: &Path) -> Result<csv::Writer<File>> {
    csv::Writer::from_path(path).context(format!("could not create output table: {}", path.display()))
}

/// `data/houses.csv` -> `data/houses_enriched.csv`
pub fn default_output_path(input_path: &Path) -> PathBuf {
    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    input_path.with_file_name(format!("{stem}_enriched.csv"))
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[LOG] start time: {}", jiff::Zoned::now().strftime("%Y-%m-%d %H:%M:%S %Z"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_next_to_input() {
        assert_eq!(
            default_output_path(Path::new("data/houses.csv")),
            PathBuf::from("data/houses_enriched.csv")
        );
        assert_eq!(
            default_output_path(Path::new("houses")),
            PathBuf::from("houses_enriched.csv")
        );
    }
}
