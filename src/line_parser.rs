//! Parses one combined transaction string into a [`Transaction`].

use crate::amount::Amount;
use crate::combiner::normalize_whitespace;
use crate::patterns::transaction_line_re;
use crate::transaction::{InclusionStatus, Transaction};
use chrono::{Datelike, Months, NaiveDate};
use log::debug;

/// Parses a combined transaction text.
///
/// Dates carry no year on the statement; each is resolved against
/// `statement_date` (see [`resolve_month_day`]). Returns `None` when the text
/// does not match the transaction pattern, a month name is unknown, or the
/// amount cannot be parsed.
///
/// The returned transaction has `start_line_number == 0` and an
/// `Undetermined` status; the caller fills in both.
pub fn parse_transaction_line(
    combined: &str,
    statement_date: Option<NaiveDate>,
) -> Option<Transaction> {
    let normalized = normalize_whitespace(combined);
    let caps = transaction_line_re().captures(&normalized)?;

    let transaction_date = resolve_month_day(&caps["date1"], statement_date)?;
    let posted_date = resolve_month_day(&caps["date2"], statement_date)?;

    let amount = match Amount::parse_statement(&caps["amount"]) {
        Ok(amount) => amount,
        Err(e) => {
            debug!("{}", e);
            return None;
        }
    };

    Some(Transaction {
        statement_date,
        transaction_date,
        posted_date,
        description: normalize_whitespace(&caps["desc"]),
        amount,
        raw_text: normalized.clone(),
        start_line_number: 0,
        inclusion_status: InclusionStatus::Undetermined,
    })
}

/// Maps a month name to its number, matching on the first 3 letters.
pub fn lookup_month(name: &str) -> Option<u32> {
    let prefix: String = name.trim().chars().take(3).collect::<String>().to_lowercase();

    let month = match prefix.as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };

    Some(month)
}

/// Resolves a `"Mon DD"` token to a calendar date.
///
/// The statement year is tried first and the previous year second, for
/// dates that do not exist in the statement year (Feb 29). A month later
/// than the statement's month belongs to the previous year. Without a
/// statement date the earliest representable year is used and no rollover
/// applies.
pub fn resolve_month_day(token: &str, statement_date: Option<NaiveDate>) -> Option<NaiveDate> {
    let mut parts = token.split_whitespace();
    let (month_name, day) = (parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let month = lookup_month(month_name)?;
    let day: u32 = day.parse().ok()?;

    let year = statement_date.map_or(NaiveDate::MIN.year(), |d| d.year());
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .or_else(|| NaiveDate::from_ymd_opt(year - 1, month, day))?;

    match statement_date {
        // Feb 29 moved into a non-leap year clamps to Feb 28.
        Some(statement) if date.month() > statement.month() => {
            date.checked_sub_months(Months::new(12))
        }
        _ => Some(date),
    }
}
