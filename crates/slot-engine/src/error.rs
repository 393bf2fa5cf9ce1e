//! Error types for the scheduling engine.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Errors raised while constructing engine inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A non-holiday working window whose start does not precede its end.
    #[error("working window for {date} is inverted: {start} >= {end}")]
    InvertedWindow {
        date: NaiveDate,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Errors raised by selection operations.
///
/// Both variants are local and recoverable: the selection is left untouched
/// when one is returned, and the caller surfaces them as inline validation
/// messages rather than retrying.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Adding another slot would exceed the requested session count.
    #[error("selection quota of {limit} session(s) reached")]
    QuotaExceeded { limit: u32 },

    /// The instant is not an available candidate in the active grid.
    #[error("slot starting at {start} is not available for selection")]
    NotAvailable { start: DateTime<Utc> },
}

/// Convenience alias used throughout slot-engine.
pub type Result<T> = std::result::Result<T, EngineError>;
