//! Reassembles transactions that the text extractor wrapped across lines.
//!
//! Starting at a line that opens with two month/day pairs, following lines
//! are absorbed until the accumulated text forms a complete transaction.
//! Each decision the scan can make is a [`Step`], so the rules stay
//! individually testable:
//!
//! - a full match whose amount has no `.`, `,` or `$` is probably a phone
//!   number or street-number fragment, so the next line is absorbed as long
//!   as it is neither a new transaction nor an amount on its own;
//! - without a full match, a following amount-only line completes the
//!   common description-then-amount wrap;
//! - the next transaction start, the supplemental details marker, or the
//!   end of input ends the scan.

use crate::patterns::{amount_only_re, details_section_re, transaction_line_re, transaction_start_re};

/// A non-blank statement line with its 1-based physical line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Splits statement text into trimmed, non-blank lines.
///
/// Blank lines carry nothing for either the header or the transactions, so
/// they are dropped here; the physical line numbers are kept for reporting.
pub fn split_lines(text: &str) -> Vec<StatementLine<'_>> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| StatementLine {
            number: idx + 1,
            text: line.trim(),
        })
        .filter(|line| !line.text.is_empty())
        .collect()
}

/// Result of [`combine_lines`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombinedText {
    /// Whitespace-normalized transaction text
    pub text: String,

    /// Index (into the line slice) of the last line consumed
    pub last_index: usize,
}

/// What the combiner does next with the accumulated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The text is a complete transaction.
    Accept,
    /// The text matched, but its amount is a bare integer that is more
    /// likely part of a wrapped description. Absorb the next line.
    AbsorbAfterBareInteger,
    /// No match yet and the next line is only an amount. Absorb it and stop.
    AbsorbAmountAndStop,
    /// No match yet. Absorb the next line and keep going.
    AbsorbWrapped,
    /// No match and the next line opens a new transaction.
    StopAtNextTransaction,
    /// No match and the next line opens the supplemental details section.
    StopAtDetailsSection,
    /// No match and no lines left.
    StopAtEndOfInput,
}

/// Decides the next step for `normalized` given the line after it.
pub fn next_step(normalized: &str, next: Option<&str>) -> Step {
    if let Some(caps) = transaction_line_re().captures(normalized) {
        let amount = &caps["amount"];
        let bare_integer = !amount.contains(['.', ',', '$']);

        return match next {
            Some(line) if bare_integer && !is_boundary(line) && !is_amount_only(line) => {
                Step::AbsorbAfterBareInteger
            }
            _ => Step::Accept,
        };
    }

    match next {
        None => Step::StopAtEndOfInput,
        Some(line) if is_transaction_start(line) => Step::StopAtNextTransaction,
        Some(line) if is_details_section(line) => Step::StopAtDetailsSection,
        Some(line) if is_amount_only(line) => Step::AbsorbAmountAndStop,
        Some(_) => Step::AbsorbWrapped,
    }
}

/// Combines lines from `start` into the longest span forming one transaction.
///
/// `start` must index `lines` and should point at a transaction start. When
/// the scan stops without a complete match the accumulated text is still
/// returned; the line parser reports it as unmatched.
pub fn combine_lines(lines: &[StatementLine<'_>], start: usize) -> CombinedText {
    let mut combined = normalize_whitespace(lines[start].text);
    let mut last_index = start;

    loop {
        let next = lines.get(last_index + 1).map(|line| line.text);

        match next_step(&combined, next) {
            Step::Accept
            | Step::StopAtNextTransaction
            | Step::StopAtDetailsSection
            | Step::StopAtEndOfInput => break,
            Step::AbsorbAfterBareInteger | Step::AbsorbWrapped => {
                last_index += 1;
                absorb(&mut combined, lines[last_index].text);
            }
            Step::AbsorbAmountAndStop => {
                last_index += 1;
                absorb(&mut combined, lines[last_index].text);
                break;
            }
        }
    }

    CombinedText {
        text: combined,
        last_index,
    }
}

fn absorb(combined: &mut String, line: &str) {
    let line = normalize_whitespace(line);
    if line.is_empty() {
        return;
    }
    if !combined.is_empty() {
        combined.push(' ');
    }
    combined.push_str(&line);
}

/// Returns `true` if the line opens with two month/day pairs.
pub fn is_transaction_start(line: &str) -> bool {
    transaction_start_re().is_match(line.trim())
}

/// Returns `true` if the line opens the itemized details of store purchases.
pub fn is_details_section(line: &str) -> bool {
    details_section_re().is_match(line.trim())
}

/// Lines the combiner never absorbs into a transaction.
fn is_boundary(line: &str) -> bool {
    is_transaction_start(line) || is_details_section(line)
}

/// Returns `true` if the line holds nothing but a monetary amount.
pub fn is_amount_only(line: &str) -> bool {
    amount_only_re().is_match(line.trim())
}

/// Collapses every whitespace run to a single space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
