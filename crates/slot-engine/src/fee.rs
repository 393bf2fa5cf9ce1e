//! Fee quoting.
//!
//! Totals are derived from a per-session base fee and the number of selected
//! slots. Amounts are integral minor currency units throughout; no floating
//! point touches money.

use serde::{Deserialize, Serialize};

/// A computed price for a set of sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeQuote {
    /// Price of a single session, in minor currency units.
    pub base_fee_minor: u64,
    /// Number of sessions priced.
    pub unit_count: u32,
    /// `base_fee_minor * unit_count`, saturating.
    pub total_minor: u64,
}

/// Quote the total fee for `unit_count` sessions.
///
/// The unit count is the *selected-slot* count, which is well-defined at any
/// point in the flow and equals the requested session count exactly when the
/// selection is submittable.
pub fn quote(base_fee_minor: u64, unit_count: u32) -> FeeQuote {
    FeeQuote {
        base_fee_minor,
        unit_count,
        total_minor: base_fee_minor.saturating_mul(u64::from(unit_count)),
    }
}
