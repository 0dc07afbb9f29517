//! Statement header extraction: issue date and declared purchases total.

use crate::amount::Amount;
use crate::combiner::StatementLine;
use crate::patterns::{purchases_total_re, statement_date_re};
use chrono::NaiveDate;
use log::{debug, warn};
use regex::Captures;

/// Values read from the statement header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatementHeader {
    /// `None` when no line carried a parsable statement date.
    pub statement_date: Option<NaiveDate>,

    /// Zero when no `Purchases <amount>` line was found.
    pub declared_purchases_total: Amount,
}

impl StatementHeader {
    fn is_complete(&self) -> bool {
        self.statement_date.is_some() && self.declared_purchases_total.is_positive()
    }
}

/// Scans from the top for the statement date and the declared purchases total.
///
/// Both lookups are anchored to their label text, not to a position. The scan
/// stops as soon as both are known. Misses are logged, never raised.
pub fn extract_header(lines: &[StatementLine<'_>]) -> StatementHeader {
    let mut header = StatementHeader::default();

    for line in lines {
        if let Some(caps) = purchases_total_re().captures(line.text) {
            match Amount::parse_statement(&caps["amount"]) {
                Ok(total) => header.declared_purchases_total = total,
                Err(e) => warn!("Line {}: failed to parse purchases total: {}", line.number, e),
            }
        }

        if let Some(caps) = statement_date_re().captures(line.text) {
            match date_from_captures(&caps) {
                Some(date) => header.statement_date = Some(date),
                None => warn!("Failed to parse statement date from line: {}", line.text),
            }
        }

        if header.is_complete() {
            debug!("Statement header complete at line {}", line.number);
            break;
        }
    }

    header
}

/// Parses the date following a `Statement date` label, e.g.
/// `Statement date: October 21, 2025`. Abbreviated month names are accepted.
pub fn parse_statement_date(line: &str) -> Option<NaiveDate> {
    statement_date_re()
        .captures(line)
        .and_then(|caps| date_from_captures(&caps))
}

fn date_from_captures(caps: &Captures<'_>) -> Option<NaiveDate> {
    let text = format!("{} {}, {}", &caps["month"], &caps["day"], &caps["year"]);
    NaiveDate::parse_from_str(&text, "%B %d, %Y").ok()
}
