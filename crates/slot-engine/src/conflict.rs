//! Conflict partitioning of candidate slots against booked intervals.
//!
//! Overlap is tested on half-open intervals: `[s1, e1)` and `[s2, e2)`
//! overlap iff `s1 < e2 && s2 < e1`. Back-to-back ranges (one ends exactly
//! when the other starts) are NOT conflicts.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::{CandidateSlot, SlotStatus};

/// A reserved time range already committed by a prior reservation.
///
/// Immutable once fetched for a (provider, date). The duration is the
/// reservation's own per-session duration, which may differ from whatever
/// duration the current booking flow is requesting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookedInterval {
    pub start: DateTime<Utc>,
    pub duration_minutes: u32,
    /// Reservation the interval was expanded from, for traceability.
    pub reservation_id: String,
}

impl BookedInterval {
    pub fn end(&self) -> DateTime<Utc> {
        self.start + Duration::minutes(i64::from(self.duration_minutes))
    }

    /// Half-open overlap against an arbitrary `[start, end)` range.
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        self.start < end && start < self.end()
    }
}

/// Candidate slots split into bookable and conflicted sets.
///
/// Both sets preserve generation order. The `booked` set exists for display;
/// only `available` members may be selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPartition {
    pub available: Vec<CandidateSlot>,
    pub booked: Vec<CandidateSlot>,
}

impl SlotPartition {
    /// Whether a slot starting at `start` is in the available set.
    pub fn is_available(&self, start: DateTime<Utc>) -> bool {
        self.available.iter().any(|slot| slot.start == start)
    }

    pub fn is_empty(&self) -> bool {
        self.available.is_empty() && self.booked.is_empty()
    }
}

/// Partition candidates into available and booked sets.
///
/// A candidate conflicts when it overlaps *any* booked interval. The overlap
/// test uses each interval's own original duration, so a 60-minute candidate
/// is blocked by the tail of an existing 30-minute reservation and vice
/// versa. Order within each output set is the candidates' input order, which
/// keeps repeated runs over identical inputs byte-for-byte identical.
pub fn partition_slots(
    candidates: Vec<CandidateSlot>,
    booked: &[BookedInterval],
) -> SlotPartition {
    let mut partition = SlotPartition::default();

    for mut slot in candidates {
        let conflicted = booked
            .iter()
            .any(|interval| interval.overlaps(slot.start, slot.end));
        if conflicted {
            slot.status = SlotStatus::Booked;
            partition.booked.push(slot);
        } else {
            slot.status = SlotStatus::Available;
            partition.available.push(slot);
        }
    }

    partition
}
