//! Opening Hours Model

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Resolved open/close window for one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpeningWindow {
    Closed,
    Open { open: NaiveTime, close: NaiveTime },
}

impl OpeningWindow {
    pub fn is_closed(&self) -> bool {
        matches!(self, OpeningWindow::Closed)
    }

    /// Whether a time-of-day falls within `[open, close]` (inclusive)
    pub fn contains(&self, time: NaiveTime) -> bool {
        match self {
            OpeningWindow::Closed => false,
            OpeningWindow::Open { open, close } => *open <= time && time <= *close,
        }
    }
}

/// Stored opening-hours record
///
/// Either a weekday default or an explicit date override. Overrides
/// win over weekday defaults when both match a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpeningHours {
    pub id: i64,
    /// Weekday this record applies to (default rule)
    pub weekday: Option<Weekday>,
    /// Explicit date this record applies to (override rule)
    pub date: Option<NaiveDate>,
    pub window: OpeningWindow,
}
