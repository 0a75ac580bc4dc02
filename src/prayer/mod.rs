//! Prayer events, daily schedules and the two pure core operations over them.
//!
//! - [`projector`]: turns raw oracle output into a validated [`DailySchedule`]
//!   and into display records.
//! - [`resolver`]: picks the next event across today and tomorrow.

pub mod error;
pub mod projector;
pub mod resolver;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;

pub use error::ScheduleError;
pub use projector::{DisplayRecord, RawSchedule, build_schedule, capitalize, project};
pub use resolver::{Day, NextPrayerPointer, resolve_next};

/// Canonical prayer identifiers, declared in chronological order within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerKey {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerKey {
    /// Every key, in canonical order.
    pub const ALL: [PrayerKey; 6] = [
        PrayerKey::Fajr,
        PrayerKey::Sunrise,
        PrayerKey::Dhuhr,
        PrayerKey::Asr,
        PrayerKey::Maghrib,
        PrayerKey::Isha,
    ];

    /// Identifier used by the oracle output and the display layer.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerKey::Fajr => "fajr",
            PrayerKey::Sunrise => "sunrise",
            PrayerKey::Dhuhr => "dhuhr",
            PrayerKey::Asr => "asr",
            PrayerKey::Maghrib => "maghrib",
            PrayerKey::Isha => "isha",
        }
    }

    /// Display name: the identifier with its first letter capitalized.
    pub fn label(&self) -> String {
        capitalize(self.as_str())
    }
}

impl fmt::Display for PrayerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prayer instant. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerEvent {
    key: PrayerKey,
    label: String,
    instant: DateTime<Utc>,
}

impl PrayerEvent {
    pub fn new(key: PrayerKey, instant: DateTime<Utc>) -> Self {
        Self {
            key,
            label: key.label(),
            instant,
        }
    }

    pub fn key(&self) -> PrayerKey {
        self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// The canonical events of one calendar date.
///
/// Holds exactly one event per [`PrayerKey`], in canonical order, with strictly
/// increasing instants. The only way to obtain one is [`build_schedule`], which
/// enforces that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySchedule {
    date: NaiveDate,
    events: Vec<PrayerEvent>,
}

impl DailySchedule {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn events(&self) -> &[PrayerEvent] {
        &self.events
    }

    pub fn get(&self, key: PrayerKey) -> &PrayerEvent {
        // Index matches the key's position in PrayerKey::ALL
        &self.events[key as usize]
    }

    pub fn first(&self) -> &PrayerEvent {
        self.get(PrayerKey::Fajr)
    }

    pub fn last(&self) -> &PrayerEvent {
        self.get(PrayerKey::Isha)
    }
}
