//! Error types for the booking client.

use slot_engine::SelectionError;
use thiserror::Error;

/// Failures talking to the scheduling backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an unexpected status.
    #[error("backend returned status {status}")]
    Status { status: u16 },

    /// The backend reported a schedule that fails engine validation.
    #[error("malformed schedule payload: {0}")]
    Malformed(#[from] slot_engine::EngineError),
}

/// Errors surfaced by a [`BookingFlow`](crate::flow::BookingFlow).
#[derive(Error, Debug)]
pub enum FlowError {
    /// Reservations or the schedule could not be fetched.
    ///
    /// This blocks slot generation until a reload succeeds: treating a
    /// failed fetch as "no reservations" would silently permit
    /// double-booking.
    #[error("fetch failed: {0}")]
    Fetch(#[from] ClientError),

    /// No successfully loaded day schedule to operate on.
    #[error("no day schedule loaded")]
    ScheduleNotLoaded,

    /// A selection operation was rejected; state is unchanged.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// Submission requires exactly the requested number of selected slots.
    #[error("selection is incomplete")]
    NotSubmittable,

    /// A selected slot is no longer free — caught either by the mandatory
    /// pre-submission re-check or by the backend's authoritative check. The
    /// day schedule has been refreshed; the caller must re-select.
    #[error("a selected slot is no longer free")]
    SubmissionConflict,
}
