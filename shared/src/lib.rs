//! Shared domain models for the reservation system
//!
//! This crate holds the data model used by the booking engine and by
//! the surrounding service crates:
//!
//! - **Tables** (`models::dining_table`): seating inventory
//! - **Reservations** (`models::reservation`): occupancy windows and
//!   transient booking requests
//! - **Opening hours** (`models::opening_hours`): per-weekday defaults
//!   with explicit date overrides
//! - **Orders** (`models::order`): lifecycle state advanced by the
//!   scheduler

pub mod models;

// Re-export common types
pub use models::{
    DiningTable, DiningTableCreate, DiningTableUpdate, OpeningHours, OpeningWindow, Order,
    OrderRef, OrderStatus, Reservation, ReservationRequest,
};
