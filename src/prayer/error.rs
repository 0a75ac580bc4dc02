//! Error kinds raised while building and resolving prayer schedules.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

/// Failures of a resolution cycle.
///
/// None of these are retryable within the same cycle: the caller re-queries on
/// the next cycle (for example after the user edits their coordinates).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The oracle output for `date` cannot form a canonical day.
    #[error("malformed schedule for {date}: {reason}")]
    MalformedSchedule { date: NaiveDate, reason: String },

    /// Neither schedule contains an event after `now`.
    #[error("no upcoming prayer after {now} in the two-day window")]
    NoUpcomingEvent { now: DateTime<Utc> },

    /// The oracle could not compute a day at all.
    #[error("prayer time calculation failed for {date}: {reason}")]
    Oracle { date: NaiveDate, reason: String },

    #[error("invalid coordinates: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}
