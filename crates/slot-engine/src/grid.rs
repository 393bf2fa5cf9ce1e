//! Candidate slot generation.
//!
//! Quantizes a working window into candidate start instants spaced by the
//! requested session duration. The requested duration is the step, not the
//! provider's native granularity: changing it yields an entirely different
//! grid, which is why selections are invalidated on duration changes.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::window::WorkingWindow;

/// Bookability of a generated slot, refined by the conflict filter.
///
/// `Booked` marks a conflict with an existing reservation only. Slots on the
/// current date that already started are never emitted at all, so "booked"
/// is distinct from "in the past".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlotStatus {
    #[default]
    Available,
    Booked,
}

/// A generated, not-yet-committed bookable time range.
///
/// `end` is always `start` plus the *requested* duration, independent of any
/// existing reservation's duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSlot {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_minutes: u32,
    pub status: SlotStatus,
}

/// Generate the candidate grid for a window.
///
/// Walks a cursor from the window start in steps of `duration_minutes`,
/// emitting every slot that fits entirely inside the window. On the current
/// date (`window.date == now`'s UTC date), slots whose start has already
/// passed are skipped without offsetting the rest of the grid.
///
/// Pure and restartable: identical inputs produce an identical, sorted slot
/// list, and the walk is bounded by the window length. A holiday window or a
/// zero duration produces no slots.
pub fn generate_slots(
    window: &WorkingWindow,
    duration_minutes: u32,
    now: DateTime<Utc>,
) -> Vec<CandidateSlot> {
    if window.is_holiday || duration_minutes == 0 {
        return Vec::new();
    }

    let step = Duration::minutes(i64::from(duration_minutes));
    let elapsed_cutoff = window.date == now.date_naive();

    let mut slots = Vec::new();
    let mut cursor = window.start;
    while cursor + step <= window.end {
        // Skip slots that already started today; the grid stays aligned to
        // the window start rather than to "now".
        if elapsed_cutoff && cursor < now {
            cursor += step;
            continue;
        }
        slots.push(CandidateSlot {
            start: cursor,
            end: cursor + step,
            duration_minutes,
            status: SlotStatus::Available,
        });
        cursor += step;
    }

    slots
}
