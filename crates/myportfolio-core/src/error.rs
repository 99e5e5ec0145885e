//! Error types for the MyPortfolio core crate.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while deriving page data from a profile record.
#[derive(Error, Debug)]
pub enum Error {
    /// A date-valued field could not be read as a calendar date.
    #[error("invalid date in field '{field}': {value:?}")]
    InvalidDate {
        /// The name of the offending field.
        field: &'static str,
        /// The raw stored value.
        value: String,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
