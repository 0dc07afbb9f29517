//! Parser settings.
//!
//! Settings are plain, strongly typed values. They can be built in code or
//! read from a JSON settings file:
//!
//! ```json
//! {
//!   "difference_tolerance": 0.01,
//!   "exclusion_patterns": ["INTEREST CHARGES", "ANNUAL FEE"]
//! }
//! ```
//!
//! Missing fields take their defaults.

use crate::amount::Amount;
use crate::error::{ReconcileError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Largest absolute difference between declared and computed totals
    /// that still counts as a match (exclusive).
    pub difference_tolerance: Amount,

    /// Case-insensitive regular expressions matched against descriptions.
    pub exclusion_patterns: Vec<String>,
}

impl ParserOptions {
    /// One cent.
    pub fn default_tolerance() -> Amount {
        Amount::from_cents(1)
    }

    /// Parses and validates settings from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: ParserOptions = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads and validates a JSON settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Replaces the difference tolerance.
    pub fn with_tolerance(mut self, tolerance: Amount) -> Self {
        self.difference_tolerance = tolerance;
        self
    }

    /// Appends one exclusion pattern.
    pub fn with_exclusion_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.exclusion_patterns.push(pattern.into());
        self
    }

    /// Rejects a negative tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.difference_tolerance < Amount::ZERO {
            return Err(ReconcileError::InvalidConfig {
                message: format!(
                    "difference_tolerance must not be negative, got {}",
                    self.difference_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            difference_tolerance: Self::default_tolerance(),
            exclusion_patterns: Vec::new(),
        }
    }
}
