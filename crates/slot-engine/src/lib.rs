//! # slot-engine
//!
//! Deterministic slot availability and conflict resolution for consultation
//! booking flows.
//!
//! Every booking screen in the product answers the same questions: which
//! slots can still be booked inside a provider's working window, which are
//! already taken, and has the user picked exactly as many as they asked for?
//! This crate is that answer computed once, as pure functions over explicit
//! state, instead of per-screen copies of the same interval arithmetic.
//!
//! The engine performs no I/O and never reads the system clock; "now" is
//! always an argument. Fetching schedules and reservations, and submitting
//! the finished selection, live in the `booking-client` crate.
//!
//! ## Modules
//!
//! - [`window`] — provider working windows and schedule lookup
//! - [`grid`] — quantize a window into candidate slots of the requested duration
//! - [`conflict`] — partition candidates against already-booked intervals
//! - [`selection`] — toggle state machine with session-count quota
//! - [`fee`] — total price from a per-session base fee
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod fee;
pub mod grid;
pub mod selection;
pub mod window;

pub use conflict::{partition_slots, BookedInterval, SlotPartition};
pub use error::{EngineError, SelectionError};
pub use fee::{quote, FeeQuote};
pub use grid::{generate_slots, CandidateSlot, SlotStatus};
pub use selection::{SelectionPhase, SelectionState, Toggle};
pub use window::{ScheduleDirectory, WorkingWindow};
