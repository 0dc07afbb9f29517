//! CSV and JSON writers for parse results.

use crate::error::{ReconcileError, Result};
use crate::result::ParseResult;
use std::io::Write;
use std::str::FromStr;

pub const CSV_HEADER: [&str; 8] = [
    "statement_date",
    "transaction_date",
    "posted_date",
    "description",
    "amount",
    "inclusion_status",
    "file_name",
    "line",
];

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ReconcileError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(ReconcileError::InvalidArgument {
                message: format!("unknown output format '{}', expected csv or json", other),
            }),
        }
    }
}

/// Writes results in the given format.
pub fn write_results<W: Write>(format: OutputFormat, results: &[ParseResult], writer: W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(results, writer),
        OutputFormat::Json => write_json(results, writer),
    }
}

/// Writes one CSV row per transaction across all results.
///
/// Dates are `YYYY-MM-DD`; the statement date column is empty when the
/// statement had none. Amounts have exactly 2 decimal places.
pub fn write_csv<W: Write>(results: &[ParseResult], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    for result in results {
        for t in &result.transactions {
            csv_writer.write_record([
                t.statement_date.map(|d| d.to_string()).unwrap_or_default(),
                t.transaction_date.to_string(),
                t.posted_date.to_string(),
                t.description.clone(),
                t.amount.to_string(),
                t.inclusion_status.to_string(),
                result.file_name.clone(),
                t.start_line_number.to_string(),
            ])?;
        }
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes all results as a pretty-printed JSON array.
pub fn write_json<W: Write>(results: &[ParseResult], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, results)?;
    writeln!(writer)?;
    Ok(())
}
