//! Booking Engine - table availability and reservation lifecycle core
//!
//! # Architecture
//!
//! Two cores share nothing except the order storage behind the
//! repository boundary:
//!
//! - **Availability engine** (`availability`): feasibility check,
//!   best-fit table matching, alternative-slot search and full-day
//!   slot enumeration. Pure per-call computation, no table assignment
//!   is ever persisted.
//! - **Lifecycle scheduler** (`lifecycle`): fixed-rate background
//!   sweep advancing order state by elapsed time (auto-cancel,
//!   reminders, invoicing).
//!
//! # Module structure
//!
//! ```text
//! booking-engine/src/
//! ├── core/          # config, errors, background task registry
//! ├── db/            # repository contracts + in-memory backend
//! ├── availability/  # allocation engine and matching strategy
//! ├── lifecycle.rs   # periodic lifecycle scheduler
//! └── utils/         # clock, time helpers, logger
//! ```

pub mod availability;
pub mod core;
pub mod db;
pub mod lifecycle;
pub mod utils;

// Re-export public types
pub use availability::{
    AvailabilityEngine, AvailabilityOutcome, BestFit, DaySlots, TableMatchStrategy,
};
pub use crate::core::{BackgroundTasks, BookingConfig, BookingError, BookingResult, TaskKind};
pub use db::repository::{
    NotificationSink, OpeningHoursProvider, OrderLifecycleRepository, RepoError, RepoResult,
    ReservationIndex, TableCatalog,
};
pub use lifecycle::LifecycleScheduler;
pub use utils::logger::{init_logger, init_logger_with_file};
pub use utils::time::{Clock, SystemClock};
