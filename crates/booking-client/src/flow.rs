//! Booking flow coordination.
//!
//! One [`BookingFlow`] owns the scheduling state for a single booking
//! attempt: the fetched day schedule, the recomputed candidate grid, and the
//! slot selection. Every screen drives this type instead of keeping its own
//! copy of the interval logic.
//!
//! Fetches are epoch-guarded. `begin_day` invalidates everything and hands
//! out a ticket; only the matching `apply_day` may install the fetched data,
//! so a slow fetch for a date the user has already navigated away from can
//! never overwrite newer reservations with stale ones.

use chrono::{DateTime, NaiveDate, Utc};
use slot_engine::{
    generate_slots, partition_slots, quote, BookedInterval, FeeQuote, SelectionState,
    SlotPartition, Toggle, WorkingWindow,
};
use tracing::{debug, warn};

use crate::api::{SubmitAck, SubmitReservation};
use crate::collector::{collect_booked, SchedulingBackend, SubmitOutcome};
use crate::error::FlowError;

/// Snapshot of one provider-day as fetched from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// `None` means no schedule is configured for the date.
    pub window: Option<WorkingWindow>,
    pub booked: Vec<BookedInterval>,
}

/// Identifies one day-load request. Only the newest ticket may apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
    date: NaiveDate,
}

impl LoadTicket {
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Whether an [`apply_day`](BookingFlow::apply_day) call took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Fresh,
    /// The ticket was superseded by a newer `begin_day`; nothing changed.
    Stale,
}

/// Scheduling state for one booking attempt against one provider.
///
/// Nothing here is shared: a flow instance is owned by exactly one booking
/// attempt at a time and is discarded when the caller abandons it. The
/// backend remains optimistic — the authoritative at-most-one-booking check
/// happens server-side at submission.
pub struct BookingFlow<B> {
    backend: B,
    provider_id: String,
    client_id: String,
    base_fee_minor: u64,
    epoch: u64,
    day: Option<DaySchedule>,
    grid: SlotPartition,
    selection: SelectionState,
}

impl<B: SchedulingBackend> BookingFlow<B> {
    pub fn new(
        backend: B,
        provider_id: impl Into<String>,
        client_id: impl Into<String>,
        base_fee_minor: u64,
        duration_minutes: u32,
        session_count: u32,
    ) -> Self {
        Self {
            backend,
            provider_id: provider_id.into(),
            client_id: client_id.into(),
            base_fee_minor,
            epoch: 0,
            day: None,
            grid: SlotPartition::default(),
            selection: SelectionState::new(duration_minutes, session_count),
        }
    }

    /// Begin loading a date, invalidating whatever was loaded before.
    ///
    /// The previous grid and selection are unusable for the new date, so
    /// both reset immediately rather than when the fetch lands.
    pub fn begin_day(&mut self, date: NaiveDate) -> LoadTicket {
        self.epoch += 1;
        self.day = None;
        self.grid = SlotPartition::default();
        self.selection.clear();
        LoadTicket {
            epoch: self.epoch,
            date,
        }
    }

    /// Fetch the window and reservations for a ticket.
    ///
    /// Pure I/O — the caller installs the result with [`apply_day`](Self::apply_day),
    /// which is what lets a superseded fetch be dropped instead of applied.
    pub async fn fetch_day(&self, ticket: LoadTicket) -> Result<DaySchedule, FlowError> {
        let window = self
            .backend
            .working_window(&self.provider_id, ticket.date)
            .await?;
        let booked = collect_booked(&self.backend, &self.provider_id, ticket.date).await?;
        Ok(DaySchedule {
            date: ticket.date,
            window,
            booked,
        })
    }

    /// Install a completed fetch, unless a newer `begin_day` superseded it.
    pub fn apply_day(
        &mut self,
        ticket: LoadTicket,
        schedule: DaySchedule,
        now: DateTime<Utc>,
    ) -> Applied {
        if ticket.epoch != self.epoch {
            warn!(
                ticket_epoch = ticket.epoch,
                current_epoch = self.epoch,
                "dropping superseded day fetch"
            );
            return Applied::Stale;
        }
        self.day = Some(schedule);
        self.recompute(now);
        Applied::Fresh
    }

    /// Begin, fetch, and apply in one call.
    ///
    /// On fetch failure the flow is left without a loaded day — fail closed:
    /// no slots are offered until a reload succeeds.
    pub async fn load_day(&mut self, date: NaiveDate, now: DateTime<Utc>) -> Result<(), FlowError> {
        let ticket = self.begin_day(date);
        let schedule = self.fetch_day(ticket).await?;
        self.apply_day(ticket, schedule, now);
        Ok(())
    }

    /// The current candidate grid. Empty while no day is loaded (including
    /// after a failed fetch), on holidays, and on dates with no schedule.
    pub fn grid(&self) -> &SlotPartition {
        &self.grid
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn day(&self) -> Option<&DaySchedule> {
        self.day.as_ref()
    }

    /// Change the requested session duration and rebuild the grid; the
    /// selection is cleared because the quantization changed.
    pub fn set_duration(&mut self, duration_minutes: u32, now: DateTime<Utc>) {
        self.selection.set_duration(duration_minutes);
        self.recompute(now);
    }

    /// Change the requested session count; the selection is cleared.
    pub fn set_session_count(&mut self, session_count: u32) {
        self.selection.set_session_count(session_count);
    }

    /// Toggle a slot on or off.
    ///
    /// # Errors
    /// [`FlowError::ScheduleNotLoaded`] before a successful load;
    /// [`FlowError::Selection`] for quota or availability rejections, which
    /// leave the selection unchanged.
    pub fn toggle(&mut self, start: DateTime<Utc>) -> Result<Toggle, FlowError> {
        if self.day.is_none() {
            return Err(FlowError::ScheduleNotLoaded);
        }
        Ok(self.selection.toggle(start, &self.grid)?)
    }

    /// Price of the current selection: base fee times selected-slot count.
    pub fn fee(&self) -> FeeQuote {
        quote(self.base_fee_minor, self.selection.selected().len() as u32)
    }

    /// Submit the completed selection.
    ///
    /// Protocol: require a full selection, re-collect reservations (the
    /// mandatory pre-submission re-check — a fetch failure here is fatal to
    /// this attempt only), recompute, and only then POST. A selection
    /// invalidated by fresh data aborts with [`FlowError::SubmissionConflict`]
    /// before any request is sent; a backend 409 surfaces the same way after
    /// the local state has been refreshed for re-selection.
    pub async fn submit(&mut self, now: DateTime<Utc>) -> Result<SubmitAck, FlowError> {
        if !self.selection.is_submittable() {
            return Err(FlowError::NotSubmittable);
        }
        let date = self
            .day
            .as_ref()
            .map(|day| day.date)
            .ok_or(FlowError::ScheduleNotLoaded)?;

        self.refresh_booked(date, now).await?;
        if !self.selection.is_submittable() {
            warn!("selection invalidated by refreshed reservations");
            return Err(FlowError::SubmissionConflict);
        }

        let request = SubmitReservation {
            provider_id: self.provider_id.clone(),
            client_id: self.client_id.clone(),
            selected_slots: self.selection.selected().iter().copied().collect(),
            duration_minutes: self.selection.duration_minutes(),
            session_count: self.selection.session_count(),
            total_fee: self.fee().total_minor,
        };

        match self.backend.submit(&request).await? {
            SubmitOutcome::Accepted(ack) => {
                debug!(reservation = %ack.reservation_id, "reservation confirmed");
                Ok(ack)
            }
            SubmitOutcome::Conflict => {
                // Refresh so the caller re-selects against current data. If
                // even the refresh fails, drop the day entirely: stale data
                // must not back another attempt.
                if self.refresh_booked(date, now).await.is_err() {
                    self.day = None;
                    self.grid = SlotPartition::default();
                    self.selection.clear();
                }
                Err(FlowError::SubmissionConflict)
            }
        }
    }

    /// Re-fetch reservations for the loaded date and recompute the grid.
    async fn refresh_booked(&mut self, date: NaiveDate, now: DateTime<Utc>) -> Result<(), FlowError> {
        let booked = collect_booked(&self.backend, &self.provider_id, date).await?;
        if let Some(day) = self.day.as_mut() {
            day.booked = booked;
        }
        self.recompute(now);
        Ok(())
    }

    /// Rebuild the grid from the loaded day and re-validate the selection.
    fn recompute(&mut self, now: DateTime<Utc>) {
        let Some(day) = &self.day else {
            self.grid = SlotPartition::default();
            self.selection.clear();
            return;
        };
        let candidates = match &day.window {
            Some(window) => generate_slots(window, self.selection.duration_minutes(), now),
            None => Vec::new(),
        };
        self.grid = partition_slots(candidates, &day.booked);
        if !self.selection.resync(&self.grid) {
            debug!("selection cleared: a picked slot left the grid");
        }
    }
}
