//! Lenient CSV normalization for ETL use.
//!
//! Each input row is copied through unchanged and extended with normalized
//! columns. A cell that cannot be normalized leaves its output columns empty;
//! the failure is tallied in the [`BatchSummary`] and never aborts the run.

use std::collections::BTreeMap;
use std::io::{Read, Write};
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::{Context, Result, bail};
use clinorm_normalization::{
    Diagnostic, DiagnosticSink, ErrorKind, Height, TracingSink, WeightOptions, format_height,
    parse_height_to_us, parse_weight_to_pounds_with,
};
use csv::{ReaderBuilder, StringRecord};

use crate::logging::redact_value;

/// Columns appended when weights are normalized.
pub const WEIGHT_OUTPUT_COLUMNS: &[&str] = &["weight_lbs"];

/// Columns appended when heights are normalized.
pub const HEIGHT_OUTPUT_COLUMNS: &[&str] = &["height_ft", "height_in", "height_display"];

/// Which columns to normalize and how.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Header of the weight column; `None` skips weights.
    pub weight_column: Option<String>,
    /// Header of the height column; `None` skips heights.
    pub height_column: Option<String>,
    pub weight: WeightOptions,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            weight_column: Some("weight".to_string()),
            height_column: Some("height".to_string()),
            weight: WeightOptions::default(),
        }
    }
}

/// Outcome counts for one normalized column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSummary {
    pub column: String,
    pub parsed: usize,
    pub blank: usize,
    pub failures: BTreeMap<ErrorKind, usize>,
}

impl ColumnSummary {
    fn new(column: &str) -> Self {
        Self {
            column: column.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.values().sum()
    }

    fn record_failure(&mut self, kind: ErrorKind) {
        *self.failures.entry(kind).or_default() += 1;
    }
}

/// Totals for a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub rows: usize,
    pub weight: Option<ColumnSummary>,
    pub height: Option<ColumnSummary>,
    /// Weights that parsed but exceeded the plausibility threshold.
    pub advisories: usize,
}

/// Normalize the configured columns of a CSV stream.
///
/// # Errors
///
/// Fails on malformed CSV, on I/O errors, and when a configured column is
/// missing from the header. Individual measurement failures are not errors.
pub fn normalize_csv<R: Read, W: Write>(
    input: R,
    output: W,
    options: &BatchOptions,
) -> Result<BatchSummary> {
    if options.weight_column.is_none() && options.height_column.is_none() {
        bail!("no columns selected for normalization");
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    let headers = reader.headers().context("failed to read CSV header")?.clone();
    let weight_index = locate(&headers, options.weight_column.as_deref())?;
    let height_index = locate(&headers, options.height_column.as_deref())?;

    let mut out_headers = headers.clone();
    if weight_index.is_some() {
        out_headers.extend(WEIGHT_OUTPUT_COLUMNS.iter().copied());
    }
    if height_index.is_some() {
        out_headers.extend(HEIGHT_OUTPUT_COLUMNS.iter().copied());
    }
    writer
        .write_record(&out_headers)
        .context("failed to write CSV header")?;

    let mut summary = BatchSummary {
        weight: options.weight_column.as_deref().map(ColumnSummary::new),
        height: options.height_column.as_deref().map(ColumnSummary::new),
        ..BatchSummary::default()
    };
    let advisories = AtomicUsize::new(0);
    let sink = |diagnostic: &Diagnostic| {
        advisories.fetch_add(1, Ordering::Relaxed);
        TracingSink.emit(diagnostic);
    };

    for (offset, record) in reader.records().enumerate() {
        // Line 1 is the header.
        let line = offset + 2;
        let record = record.with_context(|| format!("failed to read CSV line {line}"))?;
        let mut row = record.clone();

        if let (Some(index), Some(stats)) = (weight_index, summary.weight.as_mut()) {
            let raw = record.get(index).unwrap_or_default();
            row.push_field(&weight_cell(raw, line, &options.weight, &sink, stats));
        }
        if let (Some(index), Some(stats)) = (height_index, summary.height.as_mut()) {
            let raw = record.get(index).unwrap_or_default();
            for field in height_cells(raw, line, stats) {
                row.push_field(&field);
            }
        }

        writer
            .write_record(&row)
            .with_context(|| format!("failed to write CSV line {line}"))?;
        summary.rows += 1;
    }
    writer.flush().context("failed to flush CSV output")?;

    summary.advisories = advisories.into_inner();
    tracing::info!(
        rows = summary.rows,
        advisories = summary.advisories,
        "batch normalization complete"
    );
    Ok(summary)
}

fn locate(headers: &StringRecord, column: Option<&str>) -> Result<Option<usize>> {
    let Some(column) = column else {
        return Ok(None);
    };
    headers
        .iter()
        .position(|header| {
            header
                .trim_start_matches('\u{feff}')
                .trim()
                .eq_ignore_ascii_case(column)
        })
        .map(Some)
        .with_context(|| format!("column '{column}' not found in CSV header"))
}

fn weight_cell(
    raw: &str,
    line: usize,
    options: &WeightOptions,
    sink: &dyn DiagnosticSink,
    stats: &mut ColumnSummary,
) -> String {
    if raw.trim().is_empty() {
        stats.blank += 1;
        return String::new();
    }
    match parse_weight_to_pounds_with(raw, options, sink) {
        Ok(pounds) => {
            stats.parsed += 1;
            format!("{pounds:.2}")
        }
        Err(error) => {
            tracing::debug!(
                line,
                value = redact_value(raw),
                kind = %error.kind(),
                "weight not normalized"
            );
            stats.record_failure(error.kind());
            String::new()
        }
    }
}

fn height_cells(raw: &str, line: usize, stats: &mut ColumnSummary) -> [String; 3] {
    if raw.trim().is_empty() {
        stats.blank += 1;
        return Default::default();
    }
    match parse_height_to_us(raw) {
        Ok(height) => {
            stats.parsed += 1;
            height_fields(height)
        }
        Err(error) => {
            tracing::debug!(
                line,
                value = redact_value(raw),
                kind = %error.kind(),
                "height not normalized"
            );
            stats.record_failure(error.kind());
            Default::default()
        }
    }
}

/// Feet, inches, and display text, with the same rounding carry the display
/// formatter applies.
fn height_fields(height: Height) -> [String; 3] {
    let display = format_height(height.feet, height.inches);
    let inches = format!("{:.2}", height.inches);
    if inches == "12.00" {
        [
            height.feet.saturating_add(1).to_string(),
            "0.00".to_string(),
            display,
        ]
    } else {
        [height.feet.to_string(), inches, display]
    }
}
