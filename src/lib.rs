//! # Statement Reconciler
//!
//! Turns the plain-text rendering of a monthly credit-card statement into a
//! list of purchase transactions and checks their total against the
//! purchases total printed by the issuer.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: amounts use 2 decimal places via `rust_decimal`
//! - **Graceful degradation**: unparsable lines become warnings, a failed
//!   reconciliation is reported, never raised
//! - **No hidden state**: a [`StatementParser`] holds read-only settings and
//!   every `parse` call is independent
//!
//! ## Example
//!
//! ```
//! use statement_reconciler::{ParserOptions, StatementParser};
//!
//! let text = "Statement date: October 21, 2025\n\
//!             Purchases 59.36\n\
//!             Oct 15 Oct 15 DOMINOS PIZZA #390 250-861-5731\n\
//!             BC\n\
//!             59.36\n";
//!
//! let parser = StatementParser::new(&ParserOptions::default());
//! let result = parser.parse(text, "october.txt");
//! assert!(result.is_match);
//! assert_eq!(result.transactions[0].description, "DOMINOS PIZZA #390 250-861-5731 BC");
//! ```

pub mod amount;
pub mod combiner;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod header;
pub mod line_parser;
pub mod output;
mod patterns;
pub mod result;
pub mod transaction;

pub use amount::Amount;
pub use config::ParserOptions;
pub use engine::StatementParser;
pub use error::{ReconcileError, Result};
pub use filter::{PatternFilter, TransactionFilter};
pub use output::OutputFormat;
pub use result::{ParseResult, Reconciliation};
pub use transaction::{InclusionStatus, ParseWarning, Transaction};
