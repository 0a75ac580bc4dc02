//! Time source abstraction for supporting both real and simulated time.
//!
//! Every component that needs "now" receives a [`TimeSource`] (or an explicit
//! instant) instead of reading the system clock, which keeps resolution and
//! countdown deterministic under test and lets `--at` replay any moment.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Mutex;
use std::time::Instant;

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;

    /// Check if this is a simulated time source
    fn is_simulated(&self) -> bool {
        false
    }
}

/// Real-time implementation that uses actual system time
pub struct RealTimeSource;

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Simulated clock that starts at a chosen instant.
///
/// Time flows at `multiplier` times real speed from the moment of creation.
/// A multiplier of `0.0` freezes the clock at its start instant.
pub struct SimulatedTimeSource {
    start_time: DateTime<Utc>,
    origin: Instant,
    time_multiplier: f64,
}

impl SimulatedTimeSource {
    pub fn new(start_time: DateTime<Utc>, multiplier: f64) -> Self {
        Self {
            start_time,
            origin: Instant::now(),
            time_multiplier: multiplier.max(0.0),
        }
    }

    /// A clock frozen at `instant`.
    pub fn fixed(instant: DateTime<Utc>) -> Self {
        Self::new(instant, 0.0)
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<Utc> {
        if self.time_multiplier == 0.0 {
            return self.start_time;
        }
        let elapsed = self.origin.elapsed().as_secs_f64() * self.time_multiplier;
        self.start_time + ChronoDuration::milliseconds((elapsed * 1000.0) as i64)
    }

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Clock that only moves when told to. Intended for tests.
pub struct ManualTimeSource {
    current: Mutex<DateTime<Utc>>,
}

impl ManualTimeSource {
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start_time),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        if let Ok(mut current) = self.current.lock() {
            *current = instant;
        }
    }

    pub fn advance(&self, by: ChronoDuration) {
        if let Ok(mut current) = self.current.lock() {
            *current += by;
        }
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> DateTime<Utc> {
        match self.current.lock() {
            Ok(current) => *current,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    fn is_simulated(&self) -> bool {
        true
    }
}
