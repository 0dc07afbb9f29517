//! Statement line patterns, compiled once per process.

use regex::Regex;
use std::sync::OnceLock;

/// Two date tokens, a non-greedy description and a trailing amount.
///
/// Matches: `Oct 15 Oct 15 CANADIAN TIRE #123 KELOWNA BC 75.00`
/// Matches: `Nov 01 Nov 02 CIBC BANK PMT/PAIEMENT BCIC (3,463.00)`
pub(crate) fn transaction_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(concat!(
            r"^(?P<date1>[A-Za-z]{3}\s+\d{1,2})\s+",
            r"(?P<date2>[A-Za-z]{3}\s+\d{1,2})\s+",
            r"(?P<desc>.+?)\s+",
            r"(?P<amount>\(?[-+]?\$?\d{1,3}(?:,\d{3})*(?:\.\d{2})?\)?)$"
        ))
        .expect("invalid transaction line regex")
    })
}

/// Two leading month/day pairs, nothing else required.
pub(crate) fn transaction_start_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z]{3}\s+\d{1,2}\s+[A-Za-z]{3}\s+\d{1,2}\b")
            .expect("invalid transaction start regex")
    })
}

/// A line holding nothing but an amount. A separator is required, so a
/// bare `36` is not an amount line.
pub(crate) fn amount_only_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\(?[-+]?\$?\d+(?:[,.]\d*)+\)?$").expect("invalid amount-only regex")
    })
}

/// Header of the itemized section that follows the regular transactions.
pub(crate) fn details_section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^details\s+of\s+your\s+(?:.+\s+)?store\s+purchases\b")
            .expect("invalid details section regex")
    })
}

/// Matches: `Statement date: October 21, 2025`
pub(crate) fn statement_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)statement\s+date:?\s*(?P<month>[A-Za-z]+)\.?\s+(?P<day>\d{1,2}),\s*(?P<year>\d{4})",
        )
        .expect("invalid statement date regex")
    })
}

/// Matches: `Purchases 2,348.84`, `Purchases $1,500.00`
pub(crate) fn purchases_total_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)purchases\s+(?P<amount>[-+]?\$?[0-9]{1,3}(?:,[0-9]{3})*(?:\.[0-9]+)?)")
            .expect("invalid purchases total regex")
    })
}
