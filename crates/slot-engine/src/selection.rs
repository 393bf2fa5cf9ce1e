//! Slot selection state machine.
//!
//! Tracks which candidate starts a booking flow has picked, capped at the
//! requested session count. Changing the duration or the session count
//! invalidates the candidate grid the selection was made against, so both
//! transitions clear it unconditionally.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conflict::SlotPartition;
use crate::error::SelectionError;

/// Fill level of a selection relative to the requested session count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase {
    Empty,
    Partial,
    Full,
}

/// What a successful [`SelectionState::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// Selection for one booking attempt.
///
/// Invariants, preserved by every operation:
/// - `selected.len() <= session_count`
/// - every selected instant was an available candidate in the partition it
///   was toggled against (and [`resync`](Self::resync) re-establishes this
///   after the grid is recomputed)
///
/// The set is ordered, so iteration and serialization are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    duration_minutes: u32,
    session_count: u32,
    selected: BTreeSet<DateTime<Utc>>,
}

impl SelectionState {
    pub fn new(duration_minutes: u32, session_count: u32) -> Self {
        Self {
            duration_minutes,
            session_count,
            selected: BTreeSet::new(),
        }
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn session_count(&self) -> u32 {
        self.session_count
    }

    /// Selected slot starts, in chronological order.
    pub fn selected(&self) -> &BTreeSet<DateTime<Utc>> {
        &self.selected
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.selected.is_empty() {
            SelectionPhase::Empty
        } else if (self.selected.len() as u32) < self.session_count {
            SelectionPhase::Partial
        } else {
            SelectionPhase::Full
        }
    }

    /// Toggle a slot start on or off.
    ///
    /// Removal always succeeds. Addition requires the instant to be an
    /// available candidate in `grid` and the quota to have headroom; on
    /// either failure the selection is left unchanged.
    ///
    /// # Errors
    /// [`SelectionError::NotAvailable`] if `start` is not an available
    /// candidate; [`SelectionError::QuotaExceeded`] if the requested session
    /// count is already reached.
    pub fn toggle(
        &mut self,
        start: DateTime<Utc>,
        grid: &SlotPartition,
    ) -> Result<Toggle, SelectionError> {
        if self.selected.remove(&start) {
            return Ok(Toggle::Removed);
        }
        if !grid.is_available(start) {
            return Err(SelectionError::NotAvailable { start });
        }
        if self.selected.len() as u32 >= self.session_count {
            return Err(SelectionError::QuotaExceeded {
                limit: self.session_count,
            });
        }
        self.selected.insert(start);
        Ok(Toggle::Added)
    }

    /// Replace the requested duration, clearing the selection.
    ///
    /// The grid is quantized by the duration, so the old selected starts are
    /// meaningless afterwards — even a change back to the previous value has
    /// passed through an invalid grid.
    pub fn set_duration(&mut self, duration_minutes: u32) {
        self.duration_minutes = duration_minutes;
        self.selected.clear();
    }

    /// Replace the requested session count, clearing the selection.
    pub fn set_session_count(&mut self, session_count: u32) {
        self.session_count = session_count;
        self.selected.clear();
    }

    /// Re-validate the selection against a recomputed grid.
    ///
    /// The selection survives only if *every* selected instant is still an
    /// available candidate; otherwise it resets to empty. Returns whether it
    /// was retained.
    pub fn resync(&mut self, grid: &SlotPartition) -> bool {
        let retained = self.selected.iter().all(|start| grid.is_available(*start));
        if !retained {
            self.selected.clear();
        }
        retained
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Exactly the requested number of sessions is selected.
    pub fn is_submittable(&self) -> bool {
        self.session_count > 0 && self.selected.len() as u32 == self.session_count
    }
}
