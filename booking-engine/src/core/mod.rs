//! Core infrastructure: configuration, errors, background tasks

pub mod config;
pub mod error;
pub mod tasks;

pub use config::BookingConfig;
pub use error::{BookingError, BookingResult};
pub use tasks::{BackgroundTasks, TaskKind};
