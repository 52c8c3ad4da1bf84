//! Reservation Model

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Confirmed reservation with an occupancy window
///
/// The engine only reads `party_size` and the occupancy window to
/// compute concurrent demand; no table assignment is ever stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub guest_name: String,
    pub guest_phone: Option<String>,
    pub party_size: i32,
    /// Start of the occupancy window
    pub starts_at: NaiveDateTime,
    /// End of the occupancy window (exclusive)
    pub ends_at: NaiveDateTime,
}

impl Reservation {
    /// Build a reservation whose occupancy window is derived from a
    /// configured duration rather than stored explicitly.
    pub fn with_occupancy(
        id: i64,
        guest_name: impl Into<String>,
        party_size: i32,
        starts_at: NaiveDateTime,
        occupancy: Duration,
    ) -> Self {
        Self {
            id,
            guest_name: guest_name.into(),
            guest_phone: None,
            party_size,
            starts_at,
            ends_at: starts_at + occupancy,
        }
    }

    /// Whether the occupancy window covers the given instant
    pub fn occupies(&self, at: NaiveDateTime) -> bool {
        self.starts_at <= at && at < self.ends_at
    }
}

/// Incoming booking request
///
/// Transient: exists only for the duration of one allocation decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub requested_at: NaiveDateTime,
    pub party_size: i32,
}

impl ReservationRequest {
    pub fn new(requested_at: NaiveDateTime, party_size: i32) -> Self {
        Self {
            requested_at,
            party_size,
        }
    }
}
