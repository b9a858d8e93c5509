//! Error taxonomy for the line transformer.
//!
//! Every variant is a recoverable, per-line condition: none should terminate
//! the host process. The transformer never logs — it returns the variant with
//! enough context (field name, raw value) for the caller to decide whether to
//! log, count, or drop the line.

use thiserror::Error;

/// A per-line transformation failure.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The input line was empty.
    #[error("empty input line")]
    EmptyInput,

    /// Splitting on the separator did not yield the expected field count.
    #[error("malformed line: expected {expected} fields, found {found}: {raw:?}")]
    MalformedLine {
        expected: usize,
        found: usize,
        raw: String,
    },

    /// A `\xHH` escape was truncated or had non-hex digits after `\x`.
    #[error("invalid escape sequence at byte {offset} of {raw:?}")]
    InvalidEscape { offset: usize, raw: String },

    /// `$time_local` did not match the configured timestamp format.
    #[error("unparseable timestamp {raw:?}")]
    TimestampParse {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A numeric field held a non-numeric value.
    #[error("non-numeric {field} field: {raw:?}")]
    NumericParse { field: &'static str, raw: String },
}
