//! Provider working windows.
//!
//! A working window is the instant range during which a provider accepts
//! bookings on a given calendar date. Resolving one is a lookup against
//! whatever schedule data the caller holds — no computation beyond
//! validation happens here.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// The instant range during which a provider accepts bookings on one date.
///
/// A holiday window generates zero candidate slots regardless of its bounds,
/// so holiday bounds are not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    /// Calendar date the window belongs to (UTC).
    pub date: NaiveDate,
    /// First instant at which a session may start.
    pub start: DateTime<Utc>,
    /// Instant by which every session must have ended.
    pub end: DateTime<Utc>,
    /// The provider is off this date; no slots exist.
    pub is_holiday: bool,
}

impl WorkingWindow {
    /// Build a validated window.
    ///
    /// # Errors
    /// Returns [`EngineError::InvertedWindow`] when a non-holiday window has
    /// `start >= end`.
    pub fn new(
        date: NaiveDate,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        is_holiday: bool,
    ) -> Result<Self> {
        if !is_holiday && start >= end {
            return Err(EngineError::InvertedWindow { date, start, end });
        }
        Ok(Self {
            date,
            start,
            end,
            is_holiday,
        })
    }

    /// A holiday marker for a date, with degenerate bounds at midnight.
    pub fn holiday(date: NaiveDate) -> Self {
        let midnight = date.and_time(NaiveTime::MIN).and_utc();
        Self {
            date,
            start: midnight,
            end: midnight,
            is_holiday: true,
        }
    }
}

/// In-memory schedule lookup keyed by (provider, date).
///
/// Deterministic and side-effect free: the same backing data always resolves
/// to the same window. Callers that fetch schedules remotely decode straight
/// into [`WorkingWindow`] instead of going through a directory.
#[derive(Debug, Clone, Default)]
pub struct ScheduleDirectory {
    windows: HashMap<(String, NaiveDate), WorkingWindow>,
}

impl ScheduleDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the window for a (provider, date), replacing any previous one.
    pub fn insert(&mut self, provider_id: impl Into<String>, window: WorkingWindow) {
        self.windows.insert((provider_id.into(), window.date), window);
    }

    /// Look up the window for a (provider, date).
    ///
    /// `None` means the provider has no schedule configured for that date,
    /// which callers render as "no availability" — it is not an error.
    pub fn resolve(&self, provider_id: &str, date: NaiveDate) -> Option<&WorkingWindow> {
        self.windows.get(&(provider_id.to_string(), date))
    }
}
