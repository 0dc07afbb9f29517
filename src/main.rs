//! Statement Reconciler CLI
//!
//! Parses statement text files (already extracted from PDF), logs the
//! reconciliation outcome for each and writes every transaction to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --exclude "INTEREST CHARGES" 2025-10-21.txt > transactions.csv
//! cargo run -- --config settings.json --format json statements/*.txt
//! ```
//!
//! A statement that does not reconcile is reported in the log; the exit code
//! stays 0.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to see per-statement summaries

use log::info;
use statement_reconciler::output::write_results;
use statement_reconciler::{Amount, OutputFormat, ParserOptions, ReconcileError, Result, StatementParser};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[derive(Debug, Default)]
struct CliArgs {
    config: Option<PathBuf>,
    format: OutputFormat,
    tolerance: Option<Amount>,
    exclusion_patterns: Vec<String>,
    inputs: Vec<PathBuf>,
}

impl CliArgs {
    fn parse<I: Iterator<Item = String>>(mut args: I) -> Result<Self> {
        let mut cli = CliArgs::default();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => cli.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--format" => cli.format = OutputFormat::from_str(&value_for(&arg, args.next())?)?,
                "--tolerance" => {
                    let value = value_for(&arg, args.next())?;
                    let tolerance = Amount::from_str(&value).map_err(|_| ReconcileError::InvalidArgument {
                        message: format!("--tolerance expects a decimal amount, got '{}'", value),
                    })?;
                    cli.tolerance = Some(tolerance);
                }
                "--exclude" => cli.exclusion_patterns.push(value_for(&arg, args.next())?),
                flag if flag.starts_with("--") => {
                    return Err(ReconcileError::InvalidArgument {
                        message: format!("unknown option '{}'", flag),
                    })
                }
                _ => cli.inputs.push(PathBuf::from(&arg)),
            }
        }

        if cli.inputs.is_empty() {
            return Err(ReconcileError::MissingArgument);
        }

        Ok(cli)
    }

    fn options(&self) -> Result<ParserOptions> {
        let mut options = match &self.config {
            Some(path) => ParserOptions::load(path)?,
            None => ParserOptions::default(),
        };

        if let Some(tolerance) = self.tolerance {
            options = options.with_tolerance(tolerance);
        }
        for pattern in &self.exclusion_patterns {
            options = options.with_exclusion_pattern(pattern.clone());
        }

        options.validate()?;
        Ok(options)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| ReconcileError::InvalidArgument {
        message: format!("{} requires a value", flag),
    })
}

fn run() -> Result<()> {
    let cli = CliArgs::parse(env::args().skip(1))?;
    let parser = StatementParser::new(&cli.options()?);

    let mut results = Vec::with_capacity(cli.inputs.len());
    for path in &cli.inputs {
        let text = fs::read_to_string(path)?;
        let result = parser.parse(&text, &display_name(path));

        result.log_summary();
        info!("{}", result.summary_line());
        results.push(result);
    }

    let stdout = io::stdout();
    let handle = stdout.lock();
    write_results(cli.format, &results, handle)?;

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
