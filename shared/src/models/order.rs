//! Order Model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Placed, party not yet arrived
    #[default]
    Pending,
    /// Party arrived and was seated
    Seated,
    /// Meal finished
    Completed,
    /// Canceled by the guest or by the auto-cancel sweep
    Canceled,
    /// Invoiced and settled
    PaidOut,
}

/// Order entity
///
/// Mutated only through the lifecycle repository (bulk sweeps) and by
/// explicit guest actions outside this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub guest_name: String,
    pub party_size: i32,
    pub status: OrderStatus,
    /// When the party is expected
    pub scheduled_at: NaiveDateTime,
    /// When the order was placed
    pub placed_at: NaiveDateTime,
    /// When the party was seated, once `Seated`
    pub seated_at: Option<NaiveDateTime>,
}

/// Lightweight order handle passed to notification sinks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRef {
    pub id: i64,
    pub scheduled_at: NaiveDateTime,
}

impl From<&Order> for OrderRef {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            scheduled_at: order.scheduled_at,
        }
    }
}
