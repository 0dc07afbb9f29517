//! Decides which positive-amount transactions stay out of the purchases total.

use crate::transaction::Transaction;
use log::{debug, error, info};
use regex::{Regex, RegexBuilder};

/// Seam consulted by the parser for every charge.
///
/// The parser never asks about payments or credits (`amount <= 0`); those
/// are always excluded before a filter is consulted.
pub trait TransactionFilter {
    /// Returns `true` if the transaction should not count as a purchase.
    fn should_exclude_from_purchases_total(&self, transaction: &Transaction) -> bool;
}

/// Excludes transactions whose description matches any configured pattern.
///
/// Patterns are case-insensitive regular expressions. A pattern that fails
/// to compile is logged and skipped.
#[derive(Debug, Clone, Default)]
pub struct PatternFilter {
    patterns: Vec<Regex>,
}

impl PatternFilter {
    /// Compiles each pattern case-insensitively, skipping any that are invalid.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();

        for pattern in patterns {
            let pattern = pattern.as_ref();
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => compiled.push(re),
                Err(e) => error!("Invalid exclusion pattern {:?}: {}", pattern, e),
            }
        }

        if compiled.is_empty() {
            info!(
                "No exclusion patterns configured. All positive-amount transactions will be included in purchases total."
            );
        } else {
            info!(
                "Loaded {} exclusion pattern(s) for transaction filtering",
                compiled.len()
            );
        }

        PatternFilter { patterns: compiled }
    }

    /// Number of patterns that compiled successfully.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` if no pattern compiled.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl TransactionFilter for PatternFilter {
    fn should_exclude_from_purchases_total(&self, transaction: &Transaction) -> bool {
        if !transaction.amount.is_positive() {
            return false;
        }

        let excluded = self
            .patterns
            .iter()
            .any(|re| re.is_match(&transaction.description));

        if excluded {
            debug!(
                "Transaction excluded from purchases total: {} (Amount: {})",
                transaction.description, transaction.amount
            );
        }

        excluded
    }
}
