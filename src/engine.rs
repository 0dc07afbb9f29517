//! Statement parsing and reconciliation engine.
//!
//! The header is read first because transaction dates carry no year. A
//! single forward pass then combines and parses transactions, stopping at the
//! supplemental details section. Every parsed transaction gets an inclusion
//! status before the totals are reconciled.

use crate::amount::Amount;
use crate::combiner::{combine_lines, is_details_section, is_transaction_start, split_lines, StatementLine};
use crate::config::ParserOptions;
use crate::filter::{PatternFilter, TransactionFilter};
use crate::header::extract_header;
use crate::line_parser::parse_transaction_line;
use crate::result::ParseResult;
use crate::transaction::{InclusionStatus, ParseWarning, Transaction};
use chrono::NaiveDate;
use log::{debug, warn};

/// Message attached to warnings for candidate lines that did not parse.
pub const UNMATCHED_TRANSACTION_TEXT: &str = "Unmatched transaction text";

/// Parses statement text into a reconciled [`ParseResult`].
///
/// The parser holds only read-only configuration, so one instance can parse
/// any number of statements; each call is independent.
///
/// # Example
///
/// ```
/// use statement_reconciler::{ParserOptions, StatementParser};
///
/// let text = "Statement date: October 21, 2025\nPurchases 100.00\n\
///             Oct 15 Oct 15 STORE A 75.00\nOct 16 Oct 16 STORE B 25.00\n";
/// let parser = StatementParser::new(&ParserOptions::default());
/// let result = parser.parse(text, "october.txt");
/// assert!(result.is_match);
/// assert_eq!(result.transactions.len(), 2);
/// ```
pub struct StatementParser {
    tolerance: Amount,
    filter: Box<dyn TransactionFilter + Send + Sync>,
}

impl StatementParser {
    /// Creates a parser that excludes descriptions matching the configured patterns.
    pub fn new(options: &ParserOptions) -> Self {
        Self::with_filter(options, PatternFilter::new(&options.exclusion_patterns))
    }

    /// Creates a parser with a caller-supplied inclusion filter.
    ///
    /// `options.exclusion_patterns` is ignored; only the tolerance is used.
    pub fn with_filter<F>(options: &ParserOptions, filter: F) -> Self
    where
        F: TransactionFilter + Send + Sync + 'static,
    {
        StatementParser {
            tolerance: options.difference_tolerance,
            filter: Box::new(filter),
        }
    }

    /// Parses one statement.
    ///
    /// Never fails: empty text gives an empty, non-matching result, and lines
    /// that look like transactions but do not parse become warnings.
    pub fn parse(&self, text: &str, file_name: &str) -> ParseResult {
        if text.trim().is_empty() {
            return ParseResult::empty(file_name);
        }

        let lines = split_lines(text);
        let header = extract_header(&lines);

        let (mut transactions, warnings) = self.parse_transactions(&lines, header.statement_date);

        for transaction in &mut transactions {
            transaction.inclusion_status = self.inclusion_status(transaction);
        }

        ParseResult::assemble(
            file_name,
            header.statement_date,
            header.declared_purchases_total,
            transactions,
            warnings,
            self.tolerance,
        )
    }

    /// Payments and credits never count as purchases; charges are excluded
    /// only when the filter says so.
    fn inclusion_status(&self, transaction: &Transaction) -> InclusionStatus {
        let is_purchase = transaction.amount.is_positive()
            && !self.filter.should_exclude_from_purchases_total(transaction);

        if is_purchase {
            InclusionStatus::Include
        } else {
            InclusionStatus::Exclude
        }
    }

    fn parse_transactions(
        &self,
        lines: &[StatementLine<'_>],
        statement_date: Option<NaiveDate>,
    ) -> (Vec<Transaction>, Vec<ParseWarning>) {
        let mut transactions = Vec::new();
        let mut warnings = Vec::new();
        let mut idx = 0;

        while idx < lines.len() {
            let line = lines[idx];

            if is_details_section(line.text) {
                // Everything below itemizes transactions already recorded above.
                debug!("Entering supplemental details section at line {}", line.number);
                break;
            }

            if !is_transaction_start(line.text) {
                idx += 1;
                continue;
            }

            let combined = combine_lines(lines, idx);
            idx = combined.last_index + 1;

            match parse_transaction_line(&combined.text, statement_date) {
                Some(mut transaction) => {
                    transaction.start_line_number = line.number;
                    transactions.push(transaction);
                }
                None => {
                    warn!(
                        "Unmatched transaction text at line {}: {}",
                        line.number, combined.text
                    );
                    warnings.push(ParseWarning {
                        line_number: line.number,
                        message: UNMATCHED_TRANSACTION_TEXT.to_string(),
                        raw_text: combined.text,
                    });
                }
            }
        }

        (transactions, warnings)
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new(&ParserOptions::default())
    }
}
