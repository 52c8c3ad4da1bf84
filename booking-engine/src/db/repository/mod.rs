//! Repository contracts
//!
//! The core consumes these read/write contracts and never cares how
//! they are backed. All traits are object-safe and used behind
//! `Arc<dyn …>` handles.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, NaiveDateTime, Weekday};
use shared::models::{DiningTable, OpeningWindow, OrderRef, Reservation};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Full set of tables with capacities
#[async_trait]
pub trait TableCatalog: Send + Sync {
    /// All tables, active or not; the engine filters on `is_active`
    async fn find_all(&self) -> RepoResult<Vec<DiningTable>>;
}

/// Reservations whose occupancy window overlaps a point in time
#[async_trait]
pub trait ReservationIndex: Send + Sync {
    async fn find_overlapping(&self, at: NaiveDateTime) -> RepoResult<Vec<Reservation>>;
}

/// Open/close window per calendar date
///
/// Resolution order: explicit date override first, weekday default
/// second, `Closed` when neither exists.
#[async_trait]
pub trait OpeningHoursProvider: Send + Sync {
    async fn window_for(&self, date: NaiveDate, weekday: Weekday) -> RepoResult<OpeningWindow>;
}

/// Bulk state transitions driven by the lifecycle scheduler
///
/// Once-only delivery of reminders and invoices is this contract's
/// responsibility: an order returned from one of the `find_due_*`
/// calls must not be returned again.
#[async_trait]
pub trait OrderLifecycleRepository: Send + Sync {
    /// Cancel `Pending` orders scheduled more than `grace` in the
    /// past; returns how many were canceled.
    async fn cancel_late_orders(&self, grace: Duration) -> RepoResult<u64>;

    /// Orders scheduled within `lead` of now and not yet reminded
    async fn find_due_for_reminder(&self, lead: Duration) -> RepoResult<Vec<OrderRef>>;

    /// Orders `Seated` for longer than `seated_for` and not yet invoiced
    async fn find_due_for_invoice(&self, seated_for: Duration) -> RepoResult<Vec<OrderRef>>;
}

/// Outbound notification path, external to the core
///
/// Delivery is fire-and-forget from the scheduler's viewpoint; sinks
/// handle their own retries and failures.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_reminder(&self, order: &OrderRef);
    async fn send_invoice(&self, order: &OrderRef);
}
