//! Parse output and reconciliation against the declared purchases total.
//!
//! # Invariants
//!
//! - `computed_purchases_total` is the sum of `Include` transactions only
//! - `difference == declared_purchases_total - computed_purchases_total`
//! - `is_match == |difference| < tolerance`
//! - `excluded_count` counts excluded charges; payments and credits are
//!   never purchase candidates and are not counted

use crate::amount::Amount;
use crate::transaction::{ParseWarning, Transaction};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;

/// Totals computed for one statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reconciliation {
    pub computed_purchases_total: Amount,
    pub difference: Amount,
    pub is_match: bool,
    pub excluded_count: usize,
}

impl Reconciliation {
    /// Totals `Include` transactions and compares them with `declared`.
    pub fn compute(transactions: &[Transaction], declared: Amount, tolerance: Amount) -> Self {
        let computed_purchases_total: Amount = transactions
            .iter()
            .filter(|t| t.is_included())
            .map(|t| t.amount)
            .sum();

        let difference = declared - computed_purchases_total;

        Reconciliation {
            computed_purchases_total,
            difference,
            is_match: difference.abs() < tolerance,
            excluded_count: transactions.iter().filter(|t| t.is_excluded_purchase()).count(),
        }
    }
}

/// Everything parsed from one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResult {
    pub transactions: Vec<Transaction>,
    pub declared_purchases_total: Amount,
    pub computed_purchases_total: Amount,
    pub difference: Amount,
    pub is_match: bool,
    pub warnings: Vec<ParseWarning>,
    pub excluded_count: usize,
    pub statement_date: Option<NaiveDate>,
    pub file_name: String,
}

impl ParseResult {
    /// Result for a statement with no text at all. Nothing was reconciled,
    /// so it never reports a match.
    pub fn empty(file_name: &str) -> Self {
        ParseResult {
            transactions: Vec::new(),
            declared_purchases_total: Amount::ZERO,
            computed_purchases_total: Amount::ZERO,
            difference: Amount::ZERO,
            is_match: false,
            warnings: Vec::new(),
            excluded_count: 0,
            statement_date: None,
            file_name: file_name.to_string(),
        }
    }

    pub(crate) fn assemble(
        file_name: &str,
        statement_date: Option<NaiveDate>,
        declared_purchases_total: Amount,
        transactions: Vec<Transaction>,
        warnings: Vec<ParseWarning>,
        tolerance: Amount,
    ) -> Self {
        let totals = Reconciliation::compute(&transactions, declared_purchases_total, tolerance);

        ParseResult {
            transactions,
            declared_purchases_total,
            computed_purchases_total: totals.computed_purchases_total,
            difference: totals.difference,
            is_match: totals.is_match,
            warnings,
            excluded_count: totals.excluded_count,
            statement_date,
            file_name: file_name.to_string(),
        }
    }

    /// Transactions counted in the purchases total.
    pub fn included(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter().filter(|t| t.is_included())
    }

    /// One-line human-readable reconciliation outcome.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} | Declared: {} | Computed: {} | Difference: {} | Transactions: {} | Excluded: {} | Warnings: {}",
            self.file_name,
            if self.is_match { "MATCH" } else { "MISMATCH" },
            self.declared_purchases_total,
            self.computed_purchases_total,
            self.difference,
            self.transactions.len(),
            self.excluded_count,
            self.warnings.len()
        )
    }

    /// Logs the outcome; on a mismatch every transaction is listed.
    pub fn log_summary(&self) {
        info!("Processed File: {}", self.file_name);
        info!("Declared Purchases: {}", self.declared_purchases_total);
        info!("Computed Purchases: {}", self.computed_purchases_total);
        info!("Transaction Count: {}", self.transactions.len());

        if self.excluded_count > 0 {
            debug!(
                "Excluded {} transaction(s) from purchases total calculation.",
                self.excluded_count
            );
        }

        if !self.is_match {
            warn!(
                "Declared: {} | Computed: {} | Difference: {}",
                self.declared_purchases_total, self.computed_purchases_total, self.difference
            );
            warn!("Investigate this file and update parser logic if necessary.");
            for t in &self.transactions {
                info!(
                    "{} | {} | {} | {}",
                    t.transaction_date, t.description, t.amount, t.inclusion_status
                );
            }
        }
    }
}
