//! Wire types for the scheduling backend.
//!
//! Instants travel as RFC 3339 UTC strings and field names are camelCase on
//! the wire. Reservation durations arrive as free text ("30 minutes") and
//! are normalized by the [`collector`](crate::collector).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `GET /schedule/{providerId}?date=YYYY-MM-DD` response body.
///
/// A 404 on the same endpoint means "no schedule configured" and is mapped
/// to `None` by the backend trait, not decoded into this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub is_holiday: bool,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// One upstream reservation, as returned by
/// `GET /reservations/{providerId}?date=YYYY-MM-DD`.
///
/// A multi-session reservation lists one entry per sub-slot in
/// `selected_slots`; each expands into its own booked interval carrying the
/// full per-session duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRecord {
    pub id: String,
    pub selected_slots: Vec<DateTime<Utc>>,
    /// Free-text duration, e.g. "30 minutes".
    pub duration: String,
}

/// `POST /reservations` request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReservation {
    pub provider_id: String,
    pub client_id: String,
    pub selected_slots: Vec<DateTime<Utc>>,
    pub duration_minutes: u32,
    pub session_count: u32,
    /// Total fee in minor currency units.
    pub total_fee: u64,
}

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub reservation_id: String,
}
