//! # booking-client
//!
//! Async boundary around [`slot_engine`]: fetches provider schedules and
//! existing reservations from the scheduling backend, normalizes them into
//! engine inputs, and drives the select-and-submit protocol for one booking
//! attempt at a time.
//!
//! The split matters for correctness: the engine is pure and clock-free, so
//! every decision it makes is reproducible in a unit test, while this crate
//! owns the two things that are not — network fetches (which can fail, and
//! must fail *closed*) and the ordering of fetch completions (which can race
//! across a date change).
//!
//! ## Modules
//!
//! - [`api`] — wire DTOs for the scheduling backend
//! - [`collector`] — reservation fetch and normalization (the only network I/O)
//! - [`flow`] — per-attempt coordination: fetch epochs, grid recomputation, submission
//! - [`error`] — error types

pub mod api;
pub mod collector;
pub mod error;
pub mod flow;

pub use api::{ReservationRecord, ScheduleResponse, SubmitAck, SubmitReservation};
pub use collector::{
    collect_booked, normalize_reservations, parse_duration_minutes, HttpSchedulingBackend,
    SchedulingBackend, SubmitOutcome, MIN_SESSION_MINUTES,
};
pub use error::{ClientError, FlowError};
pub use flow::{Applied, BookingFlow, DaySchedule, LoadTicket};
