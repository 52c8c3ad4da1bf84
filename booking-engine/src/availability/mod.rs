//! Availability & allocation engine
//!
//! Decides whether a reservation request fits the table inventory at a
//! given instant, proposes alternative times when it does not, and
//! enumerates every bookable slot of a day. Matching is delegated to a
//! pluggable [`TableMatchStrategy`]; the default is greedy best-fit.

pub mod engine;
pub mod strategy;

pub use engine::{ALTERNATIVE_OFFSET_MINUTES, AvailabilityEngine, AvailabilityOutcome, DaySlots};
pub use strategy::{BestFit, TableMatchStrategy};
