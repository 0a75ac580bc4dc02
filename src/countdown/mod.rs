//! Remaining-time formatting and the live countdown ticker.

pub mod ticker;

use chrono::{DateTime, Duration, Utc};

pub use ticker::CountdownTicker;

/// One countdown reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownState {
    remaining: Duration,
    display: String,
    expired: bool,
}

impl CountdownState {
    /// Reading for `target` as seen at `now`.
    ///
    /// Remaining time is clamped at zero. A target at or before `now` is
    /// reported as expired so the owner can resolve the next prayer.
    pub fn at(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let raw = target - now;
        let remaining = raw.max(Duration::zero());
        Self {
            display: format_remaining(remaining),
            remaining,
            expired: raw <= Duration::zero(),
        }
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Zero-padded `HH:MM:SS`.
    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }
}

/// Format a duration as zero-padded `HH:MM:SS`.
///
/// Hours are not wrapped at 24. Negative input is treated as zero.
pub fn format_remaining(remaining: Duration) -> String {
    let millis = remaining.num_milliseconds().max(0);
    let hours = millis / 3_600_000;
    let minutes = (millis / 60_000) % 60;
    let seconds = (millis / 1_000) % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
