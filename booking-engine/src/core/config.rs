//! Engine configuration
//!
//! All temporal policy knobs live here so neither the engine nor the
//! scheduler hard-codes a duration. Values come from the environment
//! with per-field defaults.

use chrono::Duration;

/// Configuration for the availability engine and lifecycle scheduler
#[derive(Debug, Clone)]
pub struct BookingConfig {
    /// Minimum lead between "now" and a requested time
    pub min_lead_minutes: i64,
    /// Maximum advance booking horizon, in calendar months
    pub max_advance_months: u32,
    /// Step between enumerated day slots
    pub slot_step_minutes: i64,
    /// Last seating: no slot later than close minus this buffer
    pub last_seating_buffer_minutes: i64,
    /// How long a party is considered to occupy a table
    pub occupancy_minutes: i64,

    /// Delay before the scheduler's first tick
    pub scheduler_startup_delay_secs: u64,
    /// Fixed-rate tick period
    pub scheduler_period_secs: u64,
    /// Pending orders later than this past their scheduled time are canceled
    pub cancel_grace_minutes: i64,
    /// Reminders fire for orders scheduled within this lead
    pub reminder_lead_hours: i64,
    /// Invoices fire for orders seated longer than this
    pub invoice_after_seated_hours: i64,
}

impl BookingConfig {
    pub fn from_env() -> Self {
        Self {
            min_lead_minutes: env_parse("MIN_LEAD_MINUTES", 60),
            max_advance_months: env_parse("MAX_ADVANCE_MONTHS", 1),
            slot_step_minutes: env_parse("SLOT_STEP_MINUTES", 30),
            last_seating_buffer_minutes: env_parse("LAST_SEATING_BUFFER_MINUTES", 60),
            occupancy_minutes: env_parse("OCCUPANCY_MINUTES", 120),
            scheduler_startup_delay_secs: env_parse("SCHEDULER_STARTUP_DELAY_SECS", 5),
            scheduler_period_secs: env_parse("SCHEDULER_PERIOD_SECS", 60),
            cancel_grace_minutes: env_parse("CANCEL_GRACE_MINUTES", 15),
            reminder_lead_hours: env_parse("REMINDER_LEAD_HOURS", 2),
            invoice_after_seated_hours: env_parse("INVOICE_AFTER_SEATED_HOURS", 2),
        }
    }

    pub fn min_lead(&self) -> Duration {
        Duration::minutes(self.min_lead_minutes)
    }

    pub fn slot_step(&self) -> Duration {
        Duration::minutes(self.slot_step_minutes)
    }

    pub fn last_seating_buffer(&self) -> Duration {
        Duration::minutes(self.last_seating_buffer_minutes)
    }

    pub fn occupancy(&self) -> Duration {
        Duration::minutes(self.occupancy_minutes)
    }

    pub fn cancel_grace(&self) -> Duration {
        Duration::minutes(self.cancel_grace_minutes)
    }

    pub fn reminder_lead(&self) -> Duration {
        Duration::hours(self.reminder_lead_hours)
    }

    pub fn invoice_after_seated(&self) -> Duration {
        Duration::hours(self.invoice_after_seated_hours)
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            min_lead_minutes: 60,
            max_advance_months: 1,
            slot_step_minutes: 30,
            last_seating_buffer_minutes: 60,
            occupancy_minutes: 120,
            scheduler_startup_delay_secs: 5,
            scheduler_period_secs: 60,
            cancel_grace_minutes: 15,
            reminder_lead_hours: 2,
            invoice_after_seated_hours: 2,
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
