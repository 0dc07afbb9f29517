//! Transaction models produced by the statement parser.

use crate::amount::Amount;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Whether a transaction counts toward the purchases total.
///
/// `Undetermined` only exists between parsing a line and running the
/// inclusion policy; no transaction leaves the parser in that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum InclusionStatus {
    #[default]
    Undetermined,
    Include,
    Exclude,
}

impl fmt::Display for InclusionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InclusionStatus::Undetermined => "Undetermined",
            InclusionStatus::Include => "Include",
            InclusionStatus::Exclude => "Exclude",
        };
        f.write_str(label)
    }
}

/// One purchase or credit line item from a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Issue date of the statement this transaction came from, if the
    /// header carried one
    pub statement_date: Option<NaiveDate>,

    /// Date the purchase was made (year resolved from the statement)
    pub transaction_date: NaiveDate,

    /// Date the issuer posted the transaction
    pub posted_date: NaiveDate,

    /// Merchant text, single-spaced
    pub description: String,

    /// Positive for charges, negative for credits and payments
    pub amount: Amount,

    /// Whitespace-normalized text the transaction was parsed from
    pub raw_text: String,

    /// 1-based physical line where the transaction text starts
    pub start_line_number: usize,

    pub inclusion_status: InclusionStatus,
}

impl Transaction {
    /// Returns `true` if this transaction counts toward the purchases total.
    pub fn is_included(&self) -> bool {
        self.inclusion_status == InclusionStatus::Include
    }

    /// Positive-amount transaction that was deliberately left out of the total
    /// (fees, interest). Payments and credits are never counted here.
    pub fn is_excluded_purchase(&self) -> bool {
        self.inclusion_status == InclusionStatus::Exclude && self.amount.is_positive()
    }
}

/// A line that looked like the start of a transaction but could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseWarning {
    pub line_number: usize,
    pub message: String,
    pub raw_text: String,
}
