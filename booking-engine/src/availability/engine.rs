//! Availability engine
//!
//! Validation order for a booking request: opening hours, then the
//! booking window, then feasibility. Feasibility failure is not an
//! error; it becomes a (possibly empty) alternatives list.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::sync::Arc;

use crate::availability::strategy::{BestFit, TableMatchStrategy};
use crate::core::config::BookingConfig;
use crate::core::error::{BookingError, BookingResult};
use crate::db::repository::{OpeningHoursProvider, ReservationIndex, TableCatalog};
use crate::utils::time::{Clock, format_hhmm};
use shared::models::{DiningTable, OpeningWindow, ReservationRequest};

/// Probe ladder for alternative times, in minutes from the requested
/// time. Checked and returned in exactly this order.
pub const ALTERNATIVE_OFFSET_MINUTES: [i64; 4] = [-30, 30, -60, 60];

/// Outcome of an availability check
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AvailabilityOutcome {
    /// The requested time fits as-is
    Accepted,
    /// The requested time does not fit; these nearby times do.
    /// May be empty when none of the probed offsets fit either.
    Alternatives(Vec<NaiveDateTime>),
}

/// Result of enumerating a full day
///
/// `Closed` and `Full` are terminal signals, not literal slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DaySlots {
    Closed,
    Full,
    Open(Vec<String>),
}

impl DaySlots {
    /// Wire rendering: `["CLOSED"]`, `["FULL"]` or the slot list
    pub fn into_strings(self) -> Vec<String> {
        match self {
            DaySlots::Closed => vec!["CLOSED".to_string()],
            DaySlots::Full => vec!["FULL".to_string()],
            DaySlots::Open(slots) => slots,
        }
    }
}

/// Availability & allocation engine
///
/// Pure, re-entrant computation per call: all state lives behind the
/// repository handles. Two concurrent checks for overlapping times may
/// both observe the same free table and both accept - this is a
/// feasibility check, not an atomic reservation.
pub struct AvailabilityEngine {
    tables: Arc<dyn TableCatalog>,
    reservations: Arc<dyn ReservationIndex>,
    hours: Arc<dyn OpeningHoursProvider>,
    clock: Arc<dyn Clock>,
    strategy: Box<dyn TableMatchStrategy>,
    config: BookingConfig,
}

impl AvailabilityEngine {
    pub fn new(
        tables: Arc<dyn TableCatalog>,
        reservations: Arc<dyn ReservationIndex>,
        hours: Arc<dyn OpeningHoursProvider>,
        clock: Arc<dyn Clock>,
        config: BookingConfig,
    ) -> Self {
        Self {
            tables,
            reservations,
            hours,
            clock,
            strategy: Box::new(BestFit),
            config,
        }
    }

    /// Swap out the matching strategy
    pub fn with_strategy(mut self, strategy: Box<dyn TableMatchStrategy>) -> Self {
        self.strategy = strategy;
        self
    }

    /// Check whether a request can be accepted at its requested time
    ///
    /// Validates opening hours and the booking window before touching
    /// feasibility. On "no room", probes the offset ladder and returns
    /// whichever nearby times fit. Probed offsets are deliberately not
    /// re-validated against opening hours or the booking window.
    pub async fn check_availability(
        &self,
        request: &ReservationRequest,
    ) -> BookingResult<AvailabilityOutcome> {
        let requested_at = request.requested_at;
        let date = requested_at.date();

        let window = self.hours.window_for(date, date.weekday()).await?;
        if !window.contains(requested_at.time()) {
            return Err(BookingError::Closed);
        }

        let now = self.clock.now();
        if requested_at < now + self.config.min_lead() {
            return Err(BookingError::TooSoon {
                minutes: self.config.min_lead_minutes,
            });
        }
        if let Some(horizon) = now.checked_add_months(Months::new(self.config.max_advance_months))
            && requested_at > horizon
        {
            return Err(BookingError::TooFar {
                months: self.config.max_advance_months,
            });
        }

        let tables = self.active_tables().await?;
        if tables.is_empty() {
            return Err(BookingError::NoTablesConfigured);
        }

        if self
            .feasible_with(&tables, requested_at, request.party_size)
            .await?
        {
            tracing::debug!(
                requested_at = %requested_at,
                party_size = request.party_size,
                "Booking request accepted"
            );
            return Ok(AvailabilityOutcome::Accepted);
        }

        let mut alternatives = Vec::new();
        for offset in ALTERNATIVE_OFFSET_MINUTES {
            let candidate = requested_at + Duration::minutes(offset);
            if self
                .feasible_with(&tables, candidate, request.party_size)
                .await?
            {
                alternatives.push(candidate);
            }
        }
        tracing::debug!(
            requested_at = %requested_at,
            party_size = request.party_size,
            alternatives = alternatives.len(),
            "Booking request not feasible, proposing alternatives"
        );
        Ok(AvailabilityOutcome::Alternatives(alternatives))
    }

    /// Standalone feasibility check
    ///
    /// Does not validate opening hours or the booking window. An empty
    /// catalog reports `false`, never "full".
    pub async fn is_feasible(&self, at: NaiveDateTime, party_size: i32) -> BookingResult<bool> {
        let tables = self.active_tables().await?;
        if tables.is_empty() {
            return Ok(false);
        }
        self.feasible_with(&tables, at, party_size).await
    }

    /// Enumerate every bookable slot of a day
    ///
    /// Walks the open window in fixed steps from the open time up to
    /// close minus the last-seating buffer, dropping slots closer than
    /// the minimum lead from now.
    pub async fn enumerate_day_slots(
        &self,
        date: NaiveDate,
        party_size: i32,
    ) -> BookingResult<DaySlots> {
        let window = self.hours.window_for(date, date.weekday()).await?;
        let OpeningWindow::Open { open, close } = window else {
            return Ok(DaySlots::Closed);
        };

        let earliest = self.clock.now() + self.config.min_lead();
        let last = date.and_time(close) - self.config.last_seating_buffer();
        let step = self.config.slot_step();

        let mut slots = Vec::new();
        let mut slot = date.and_time(open);
        while slot <= last {
            if slot >= earliest && self.is_feasible(slot, party_size).await? {
                slots.push(format_hhmm(slot.time()));
            }
            slot = slot + step;
        }

        if slots.is_empty() {
            return Ok(DaySlots::Full);
        }
        Ok(DaySlots::Open(slots))
    }

    async fn active_tables(&self) -> BookingResult<Vec<DiningTable>> {
        let tables = self.tables.find_all().await?;
        Ok(tables.into_iter().filter(|t| t.is_active).collect())
    }

    /// Demand at `at` = every overlapping party plus the new one
    async fn feasible_with(
        &self,
        tables: &[DiningTable],
        at: NaiveDateTime,
        party_size: i32,
    ) -> BookingResult<bool> {
        let overlapping = self.reservations.find_overlapping(at).await?;
        let mut demands: Vec<i32> = overlapping.iter().map(|r| r.party_size).collect();
        demands.push(party_size);
        Ok(self.strategy.can_seat(&demands, tables))
    }
}
