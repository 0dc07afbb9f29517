//! Error types for the statement reconciler.

use thiserror::Error;

/// Result type alias for reconciler operations
pub type Result<T> = std::result::Result<T, ReconcileError>;

/// Errors that can occur outside the recoverable parsing path.
///
/// Unparsable statement lines never produce one of these; they are
/// reported as [`crate::ParseWarning`]s on the result instead.
#[derive(Error, Debug)]
pub enum ReconcileError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON reading or writing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Amount token that is not a statement-formatted number
    #[error("Invalid amount: {token}")]
    InvalidAmount { token: String },

    /// Settings that cannot be used
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Unrecognized or malformed command line argument
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// No statement files were given
    #[error("Missing input file argument. Usage: statement-reconciler [--config <settings.json>] [--format csv|json] [--tolerance <amount>] [--exclude <regex>]... <statement.txt>...")]
    MissingArgument,
}
