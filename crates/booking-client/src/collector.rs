//! Reservation collection and normalization.
//!
//! The only network I/O in the scheduling core lives behind
//! [`SchedulingBackend`]. The production implementation speaks HTTP via
//! `reqwest`; tests substitute a stub server.
//!
//! Fetch failures are always surfaced as errors. An empty reservation list
//! is a legitimate answer ("genuinely nothing booked"); a failed fetch is
//! not, because generating slots from it would allow double-booking.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use slot_engine::{BookedInterval, WorkingWindow};
use tracing::{debug, warn};

use crate::api::{ReservationRecord, ScheduleResponse, SubmitAck, SubmitReservation};
use crate::error::ClientError;

/// Minimum session length the platform offers. Fallback for reservation
/// records whose free-text duration cannot be parsed.
pub const MIN_SESSION_MINUTES: u32 = 30;

/// Result of a submission attempt at the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(SubmitAck),
    /// At least one selected slot was taken between fetch and submit.
    Conflict,
}

/// Backend operations a booking flow depends on.
#[async_trait]
pub trait SchedulingBackend: Send + Sync {
    /// The provider's working window for a date.
    ///
    /// `Ok(None)` means no schedule is configured for that date — rendered
    /// as "no availability", never as an error.
    async fn working_window(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Option<WorkingWindow>, ClientError>;

    /// Raw reservation records for a (provider, date).
    async fn reservations(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<ReservationRecord>, ClientError>;

    /// Submit a completed selection. The backend re-checks authoritatively
    /// and reports a conflict if any slot is no longer free.
    async fn submit(&self, request: &SubmitReservation) -> Result<SubmitOutcome, ClientError>;
}

/// HTTP implementation of [`SchedulingBackend`].
#[derive(Debug, Clone)]
pub struct HttpSchedulingBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSchedulingBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Reuse an existing client (connection pool, middleware).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SchedulingBackend for HttpSchedulingBackend {
    async fn working_window(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Option<WorkingWindow>, ClientError> {
        let url = format!(
            "{}/schedule/{}?date={}",
            self.base_url,
            provider_id,
            date.format("%Y-%m-%d")
        );
        let response = self.client.get(&url).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                let body: ScheduleResponse = response.json().await?;
                let window =
                    WorkingWindow::new(date, body.start, body.end, body.is_holiday)?;
                Ok(Some(window))
            }
            status => Err(ClientError::Status {
                status: status.as_u16(),
            }),
        }
    }

    async fn reservations(
        &self,
        provider_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<ReservationRecord>, ClientError> {
        let url = format!(
            "{}/reservations/{}?date={}",
            self.base_url,
            provider_id,
            date.format("%Y-%m-%d")
        );
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }

    async fn submit(&self, request: &SubmitReservation) -> Result<SubmitOutcome, ClientError> {
        let url = format!("{}/reservations", self.base_url);
        let response = self.client.post(&url).json(request).send().await?;

        match response.status() {
            StatusCode::CONFLICT => Ok(SubmitOutcome::Conflict),
            status if status.is_success() => {
                let ack: SubmitAck = response.json().await?;
                Ok(SubmitOutcome::Accepted(ack))
            }
            status => Err(ClientError::Status {
                status: status.as_u16(),
            }),
        }
    }
}

/// Extract an integral minute count from free text like `"30 minutes"`.
///
/// The first digit run wins; zero and digit-free strings are unparsable.
pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let digits: String = raw
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok().filter(|&minutes| minutes > 0)
}

/// Normalize upstream records into booked intervals, one per sub-slot.
///
/// A 3-session, 30-minute reservation becomes three 30-minute intervals,
/// not one 90-minute block. Unparsable durations fall back to
/// [`MIN_SESSION_MINUTES`].
pub fn normalize_reservations(records: &[ReservationRecord]) -> Vec<BookedInterval> {
    let mut intervals = Vec::new();
    for record in records {
        let duration_minutes = parse_duration_minutes(&record.duration).unwrap_or_else(|| {
            warn!(
                reservation = %record.id,
                raw = %record.duration,
                "unparsable reservation duration, assuming platform minimum"
            );
            MIN_SESSION_MINUTES
        });
        for start in &record.selected_slots {
            intervals.push(BookedInterval {
                start: *start,
                duration_minutes,
                reservation_id: record.id.clone(),
            });
        }
    }
    intervals
}

/// Fetch and normalize the booked intervals for a (provider, date).
pub async fn collect_booked<B: SchedulingBackend + ?Sized>(
    backend: &B,
    provider_id: &str,
    date: NaiveDate,
) -> Result<Vec<BookedInterval>, ClientError> {
    let records = backend.reservations(provider_id, date).await?;
    debug!(
        provider = provider_id,
        %date,
        records = records.len(),
        "fetched reservations"
    );
    Ok(normalize_reservations(&records))
}
