use std::time::Duration;

use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};

use enrich::config::EnrichConfig;
use enrich::enricher::CoastalEnricher;
use enrich::io;
use enrich::io::cli::Cli;
use shoreline::io::read_boundary_resource;
use shoreline::util::terminator::DeadlineTerminator;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: EnrichConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            EnrichConfig::default()
        }
        Some(config_file) => io::read_json(&config_file)?,
    };

    info!("[MAIN] Successfully parsed EnrichConfig: {config:?}");

    let ext_boundary = read_boundary_resource(&args.boundary_file)?;
    let enricher = CoastalEnricher::from_resource(&ext_boundary, config)?;

    let output_file = args
        .output_file
        .unwrap_or_else(|| io::default_output_path(&args.input_file));
    let mut reader = io::open_table(&args.input_file)?;
    let mut writer = io::create_table(&output_file)?;

    let report = match enricher.config().time_limit_s {
        Some(time_limit_s) => {
            let terminator = DeadlineTerminator::new(Duration::from_secs(time_limit_s));
            enricher.enrich_until(&mut reader, &mut writer, &terminator)?
        }
        None => enricher.enrich(&mut reader, &mut writer)?,
    };
    info!("[MAIN] enriched table written to {}", output_file.display());

    let report_file = output_file.with_extension("report.json");
    io::write_json(&report, &report_file)?;

    Ok(())
}
