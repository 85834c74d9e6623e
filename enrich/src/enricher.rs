use std::io::{Read, Write};

use anyhow::{Context, Result, bail};
use itertools::Itertools;
use log::{debug, info, warn};
use serde::Serialize;

use shoreline::ShorelineError;
use shoreline::geometry::primitives::GeoPoint;
use shoreline::index::CoastalDistanceIndex;
use shoreline::io::ext_repr::ExtBoundaryResource;
use shoreline::io::import::Importer;
use shoreline::util::Terminator;
use shoreline::util::terminator::NoTerminator;

use crate::EPOCH;
use crate::config::EnrichConfig;
use crate::{date, property_type};

/// A record for which no distance could be computed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowFailure {
    /// 1-based, the header row not included
    pub row: usize,
    pub reason: String,
}

/// Summary of an enrichment run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EnrichReport {
    pub rows_read: usize,
    pub rows_enriched: usize,
    pub failures: Vec<RowFailure>,
    /// Rows left without a distance because the run was terminated
    pub rows_skipped: usize,
    pub terminated: bool,
}

/// Positions of the relevant columns in the input header
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    /// Number of header fields, shorter records are padded to it
    n_columns: usize,
    lat: usize,
    lng: usize,
    property_type: Option<usize>,
    date: Option<usize>,
    /// `None` if the output column is appended
    output: Option<usize>,
}

/// Adds the distance to the coastline to every record of a CSV table.
#[derive(Debug, Clone)]
pub struct CoastalEnricher {
    index: CoastalDistanceIndex,
    config: EnrichConfig,
}

impl CoastalEnricher {
    pub fn new(index: CoastalDistanceIndex, config: EnrichConfig) -> Self {
        Self { index, config }
    }

    /// Imports the coastline from a GeoJSON resource and builds the index over it
    pub fn from_resource(ext_resource: &ExtBoundaryResource, config: EnrichConfig) -> Result<Self> {
        let importer = Importer::new(config.feature_selection);
        let coastline = importer
            .import_coastline(ext_resource)
            .context("could not import coastline")?;
        let index = CoastalDistanceIndex::from_coastline(coastline, config.index_config);
        info!(
            "[ENRICH] index built over {} rings, {} points [{:.3}s]",
            index.coastline().rings().len(),
            index.coastline().n_points(),
            EPOCH.elapsed().as_secs_f64()
        );
        Ok(Self::new(index, config))
    }

    pub fn enrich<R: Read, W: Write>(
        &self,
        reader: &mut csv::Reader<R>,
        writer: &mut csv::Writer<W>,
    ) -> Result<EnrichReport> {
        self.enrich_until(reader, writer, &NoTerminator)
    }

    /// Copies every record from `reader` to `writer` with the distance column filled in.
    /// Once `terminator` fires, the remaining records are still written, with an empty distance.
    ///
    /// Records shorter than the header are padded with empty fields. Use a flexible reader
    /// (see [`io::table_reader`](crate::io::table_reader)): a non-flexible one rejects such
    /// records, which are then only listed in the report.
    pub fn enrich_until<R: Read, W: Write>(
        &self,
        reader: &mut csv::Reader<R>,
        writer: &mut csv::Writer<W>,
        terminator: &impl Terminator,
    ) -> Result<EnrichReport> {
        if self.config.chunk_size == 0 {
            bail!("chunk size must be at least 1");
        }
        let header = reader.headers().context("could not read header row")?.clone();
        let layout = self.column_layout(&header)?;

        let mut out_header = header.clone();
        if layout.output.is_none() {
            out_header.push_field(&self.config.output_column);
        }
        writer.write_record(&out_header)?;

        let mut report = EnrichReport::default();
        let chunks = reader.byte_records().chunks(self.config.chunk_size);
        for (chunk_idx, chunk) in chunks.into_iter().enumerate() {
            let mut records = vec![];
            for record in chunk {
                report.rows_read += 1;
                let row = report.rows_read;
                match record {
                    Ok(record) => records.push((row, record)),
                    Err(err) if err.is_io_error() => {
                        return Err(err).context(format!("could not read row {row}"));
                    }
                    //the record cannot be reproduced, it is reported instead
                    Err(err) => report_failure(&mut report, row, format!("unreadable record: {err}")),
                }
            }

            let distances = self.evaluate_chunk(&records, layout, terminator, &mut report);
            for ((row, record), distance) in records.iter().zip(distances) {
                writer.write_record(&self.output_record(*row, record, distance, layout))?;
            }
            info!(
                "[ENRICH] chunk {chunk_idx}: {} rows, {} enriched in total [{:.3}s]",
                records.len(),
                report.rows_enriched,
                EPOCH.elapsed().as_secs_f64()
            );
        }
        writer.flush()?;
        report.failures.sort_by_key(|f| f.row);

        if report.terminated {
            warn!(
                "[ENRICH] terminated early, {} rows were written without a distance",
                report.rows_skipped
            );
        }
        info!(
            "[ENRICH] finished: {} rows read, {} enriched, {} failed",
            report.rows_read,
            report.rows_enriched,
            report.failures.len()
        );
        Ok(report)
    }

    fn column_layout(&self, header: &csv::StringRecord) -> Result<ColumnLayout> {
        let find = |name: &str| header.iter().position(|h| h == name);
        let lat = find(&self.config.lat_column)
            .with_context(|| format!("latitude column {:?} not found in header", self.config.lat_column))?;
        let lng = find(&self.config.lng_column)
            .with_context(|| format!("longitude column {:?} not found in header", self.config.lng_column))?;
        let property_type = match &self.config.property_type_column {
            None => None,
            Some(name) => {
                let idx = find(name);
                if idx.is_none() {
                    warn!("[ENRICH] property type column {name:?} not found in header, no ranking is done");
                }
                idx
            }
        };
        let date = match &self.config.date_column {
            None => None,
            Some(name) => {
                let idx = find(name);
                if idx.is_none() {
                    debug!("[ENRICH] date column {name:?} not found in header, dates are left untouched");
                }
                idx
            }
        };
        let output = find(&self.config.output_column);
        if output.is_some() {
            debug!(
                "[ENRICH] column {:?} already exists and will be overwritten",
                self.config.output_column
            );
        }
        Ok(ColumnLayout {
            n_columns: header.len(),
            lat,
            lng,
            property_type,
            date,
            output,
        })
    }

    /// Distances of a chunk of records, index-aligned. `None` for records without a distance.
    fn evaluate_chunk(
        &self,
        records: &[(usize, csv::ByteRecord)],
        layout: ColumnLayout,
        terminator: &impl Terminator,
        report: &mut EnrichReport,
    ) -> Vec<Option<f64>> {
        let mut distances = vec![None; records.len()];

        //only the records with parsable coordinates are sent to the index
        let mut batch_positions = vec![];
        let mut batch_points = vec![];
        for (i, (row, record)) in records.iter().enumerate() {
            match parse_point(record, layout) {
                Ok(point) => {
                    batch_positions.push(i);
                    batch_points.push(point);
                }
                Err(reason) => report_failure(report, *row, reason),
            }
        }

        let results = self.index.nearest_distances_until(&batch_points, terminator);
        for (i, result) in batch_positions.into_iter().zip(results) {
            match result {
                Ok(res) => {
                    distances[i] = Some(res.distance);
                    report.rows_enriched += 1;
                }
                Err(ShorelineError::Cancelled) => {
                    report.terminated = true;
                    report.rows_skipped += 1;
                }
                Err(err) => report_failure(report, records[i].0, err.to_string()),
            }
        }
        distances
    }

    fn output_record(
        &self,
        row: usize,
        record: &csv::ByteRecord,
        distance: Option<f64>,
        layout: ColumnLayout,
    ) -> csv::ByteRecord {
        let distance = distance.map(|d| d.to_string()).unwrap_or_default();
        let n_fields = layout.n_columns.max(record.len());
        let mut out = csv::ByteRecord::with_capacity(record.as_slice().len() + distance.len(), n_fields + 1);
        for i in 0..n_fields {
            let field = record.get(i).unwrap_or_default();
            if Some(i) == layout.output {
                out.push_field(distance.as_bytes());
            } else if Some(i) == layout.property_type {
                let rank = std::str::from_utf8(field)
                    .ok()
                    .and_then(property_type::rank)
                    .map(|r| r.to_string())
                    .unwrap_or_default();
                out.push_field(rank.as_bytes());
            } else if Some(i) == layout.date && !field.is_empty() {
                match std::str::from_utf8(field).ok().and_then(|d| date::to_iso(d, &self.config.date_format)) {
                    Some(iso) => out.push_field(iso.as_bytes()),
                    None => {
                        warn!("[ENRICH] row {row}: unparsable date {:?}, kept as is", String::from_utf8_lossy(field));
                        out.push_field(field);
                    }
                }
            } else {
                out.push_field(field);
            }
        }
        if layout.output.is_none() {
            out.push_field(distance.as_bytes());
        }
        out
    }

    pub fn index(&self) -> &CoastalDistanceIndex {
        &self.index
    }

    pub fn config(&self) -> &EnrichConfig {
        &self.config
    }
}

fn parse_point(record: &csv::ByteRecord, layout: ColumnLayout) -> std::result::Result<GeoPoint, String> {
    let parse = |idx: usize| {
        let field = String::from_utf8_lossy(record.get(idx).unwrap_or_default());
        let field = field.trim();
        field
            .parse::<f64>()
            .map_err(|_| format!("unparsable coordinate {field:?}"))
    };
    Ok(GeoPoint::new(parse(layout.lat)?, parse(layout.lng)?))
}

fn report_failure(report: &mut EnrichReport, row: usize, reason: String) {
    warn!("[ENRICH] row {row}: {reason}");
    report.failures.push(RowFailure { row, reason });
}
