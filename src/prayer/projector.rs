//! Projection of raw oracle output into canonical schedules and display records.
//!
//! The oracle may expose any number of named fields (`midnight`, `last_third`,
//! bookkeeping values). Only the canonical keys survive, and they are looked up
//! by walking [`PrayerKey::ALL`] rather than the oracle's own field set.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{DailySchedule, PrayerEvent, PrayerKey, ScheduleError};

/// Oracle output for one date: instants keyed by arbitrary field names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawSchedule {
    fields: BTreeMap<String, DateTime<Utc>>,
}

impl RawSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, field: impl Into<String>, instant: DateTime<Utc>) -> Self {
        self.insert(field, instant);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, instant: DateTime<Utc>) {
        self.fields.insert(field.into(), instant);
    }

    pub fn get(&self, field: &str) -> Option<DateTime<Utc>> {
        self.fields.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A display-ready row: `{label, time, id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRecord {
    pub label: String,
    pub time: DateTime<Utc>,
    pub id: PrayerKey,
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Validate raw oracle output for `date` and build its canonical schedule.
///
/// Fails with [`ScheduleError::MalformedSchedule`] when any canonical key is
/// missing or the instants are not strictly increasing in canonical order.
pub fn build_schedule(date: NaiveDate, raw: &RawSchedule) -> Result<DailySchedule, ScheduleError> {
    let missing: Vec<&str> = PrayerKey::ALL
        .iter()
        .map(PrayerKey::as_str)
        .filter(|id| raw.get(id).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ScheduleError::MalformedSchedule {
            date,
            reason: format!("missing {}", missing.join(", ")),
        });
    }

    let mut events: Vec<PrayerEvent> = Vec::with_capacity(PrayerKey::ALL.len());
    for key in PrayerKey::ALL {
        let Some(instant) = raw.get(key.as_str()) else {
            continue;
        };
        if let Some(previous) = events.last()
            && instant <= previous.instant()
        {
            return Err(ScheduleError::MalformedSchedule {
                date,
                reason: format!("{} is not after {}", key, previous.key()),
            });
        }
        events.push(PrayerEvent::new(key, instant));
    }

    Ok(DailySchedule { date, events })
}

/// Map a schedule to display records, one per canonical key, in order.
pub fn project(schedule: &DailySchedule) -> Vec<DisplayRecord> {
    schedule
        .events()
        .iter()
        .map(|event| DisplayRecord {
            label: event.label().to_string(),
            time: event.instant(),
            id: event.key(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn full_day() -> RawSchedule {
        RawSchedule::new()
            .with("fajr", at(5, 0))
            .with("sunrise", at(6, 20))
            .with("dhuhr", at(12, 15))
            .with("asr", at(15, 30))
            .with("maghrib", at(18, 0))
            .with("isha", at(19, 30))
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fajr"), "Fajr");
        assert_eq!(capitalize("MAGHRIB"), "Maghrib");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_extraneous_fields_are_dropped() {
        let raw = full_day()
            .with("midnight", at(23, 45))
            .with("last_third", at(2, 10))
            .with("calculation_method", at(0, 0));
        assert_eq!(raw.len(), 9);

        let schedule = build_schedule(date(), &raw).unwrap();
        let records = project(&schedule);

        assert_eq!(records.len(), 6);
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Fajr", "Sunrise", "Dhuhr", "Asr", "Maghrib", "Isha"]
        );
        let ids: Vec<PrayerKey> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, PrayerKey::ALL.to_vec());
        assert!(records.windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn test_records_carry_event_labels() {
        let schedule = build_schedule(date(), &full_day()).unwrap();
        for (record, event) in project(&schedule).iter().zip(schedule.events()) {
            assert_eq!(record.label, event.label());
            assert_eq!(record.id, event.key());
            assert_eq!(record.time, event.instant());
        }
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let mut raw = RawSchedule::new()
            .with("fajr", at(5, 0))
            .with("sunrise", at(6, 20))
            .with("dhuhr", at(12, 15))
            .with("maghrib", at(18, 0));
        raw.insert("midnight", at(23, 0));

        let err = build_schedule(date(), &raw).unwrap_err();
        match err {
            ScheduleError::MalformedSchedule { date: d, reason } => {
                assert_eq!(d, date());
                assert!(reason.contains("asr"));
                assert!(reason.contains("isha"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_raw_schedule_is_malformed() {
        assert!(matches!(
            build_schedule(date(), &RawSchedule::new()),
            Err(ScheduleError::MalformedSchedule { .. })
        ));
    }

    #[test]
    fn test_out_of_order_instants_are_malformed() {
        let raw = full_day().with("asr", at(11, 0));
        assert!(matches!(
            build_schedule(date(), &raw),
            Err(ScheduleError::MalformedSchedule { .. })
        ));

        // Equal instants are not strictly increasing either
        let raw = full_day().with("maghrib", at(19, 30));
        assert!(build_schedule(date(), &raw).is_err());
    }

    #[test]
    fn test_schedule_accessors() {
        let schedule = build_schedule(date(), &full_day()).unwrap();
        assert_eq!(schedule.date(), date());
        assert_eq!(schedule.first().key(), PrayerKey::Fajr);
        assert_eq!(schedule.last().key(), PrayerKey::Isha);
        assert_eq!(schedule.get(PrayerKey::Asr).instant(), at(15, 30));
        assert_eq!(schedule.get(PrayerKey::Dhuhr).label(), "Dhuhr");
    }

    #[test]
    fn test_display_record_json_shape() {
        let schedule = build_schedule(date(), &full_day()).unwrap();
        let json = serde_json::to_value(&project(&schedule)[0]).unwrap();
        assert_eq!(json["label"], "Fajr");
        assert_eq!(json["id"], "fajr");
        assert_eq!(json["time"], "2024-01-15T05:00:00Z");
    }
}
