//! Resolution of the next prayer across the today/tomorrow window.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::{DailySchedule, PrayerEvent, ScheduleError};

/// Which schedule of the window an event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Today,
    Tomorrow,
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Day::Today => write!(f, "today"),
            Day::Tomorrow => write!(f, "tomorrow"),
        }
    }
}

/// The next event and the day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayerPointer {
    pub event: PrayerEvent,
    pub day: Day,
}

/// Find the first event strictly after `now`, looking at today before tomorrow.
///
/// An event whose instant equals `now` is not next: the countdown keeps
/// running until the moment has passed. Once today's Isha is behind us the
/// answer rolls over to tomorrow, normally its Fajr.
pub fn resolve_next(
    today: &DailySchedule,
    tomorrow: &DailySchedule,
    now: DateTime<Utc>,
) -> Result<NextPrayerPointer, ScheduleError> {
    let upcoming = |schedule: &DailySchedule| {
        schedule
            .events()
            .iter()
            .find(|event| event.instant() > now)
            .cloned()
    };

    if let Some(event) = upcoming(today) {
        return Ok(NextPrayerPointer {
            event,
            day: Day::Today,
        });
    }

    upcoming(tomorrow)
        .map(|event| NextPrayerPointer {
            event,
            day: Day::Tomorrow,
        })
        .ok_or(ScheduleError::NoUpcomingEvent { now })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer::{PrayerKey, RawSchedule, build_schedule};
    use chrono::{Duration, NaiveDate, TimeZone};

    fn day(date: NaiveDate) -> DailySchedule {
        let at = |h: u32, m: u32| {
            Utc.from_utc_datetime(&date.and_hms_opt(h, m, 0).unwrap())
        };
        let raw = RawSchedule::new()
            .with("fajr", at(5, 0))
            .with("sunrise", at(6, 20))
            .with("dhuhr", at(12, 15))
            .with("asr", at(15, 30))
            .with("maghrib", at(18, 0))
            .with("isha", at(19, 30));
        build_schedule(date, &raw).unwrap()
    }

    fn window() -> (DailySchedule, DailySchedule) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        (day(today), day(today.succ_opt().unwrap()))
    }

    #[test]
    fn test_before_fajr_resolves_to_todays_fajr() {
        let (today, tomorrow) = window();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 3, 0, 0).unwrap();
        let next = resolve_next(&today, &tomorrow, now).unwrap();
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.event.key(), PrayerKey::Fajr);
    }

    #[test]
    fn test_midday_resolves_to_asr() {
        let (today, tomorrow) = window();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 13, 0, 0).unwrap();
        let next = resolve_next(&today, &tomorrow, now).unwrap();
        assert_eq!(next.day, Day::Today);
        assert_eq!(next.event.key(), PrayerKey::Asr);
    }

    #[test]
    fn test_exact_instant_is_not_next() {
        let (today, tomorrow) = window();
        let dhuhr = today.get(PrayerKey::Dhuhr).instant();
        let next = resolve_next(&today, &tomorrow, dhuhr).unwrap();
        assert_eq!(next.event.key(), PrayerKey::Asr);

        let next = resolve_next(&today, &tomorrow, dhuhr - Duration::milliseconds(1)).unwrap();
        assert_eq!(next.event.key(), PrayerKey::Dhuhr);
    }

    #[test]
    fn test_now_at_isha_rolls_over_to_tomorrow() {
        let (today, tomorrow) = window();
        let next = resolve_next(&today, &tomorrow, today.last().instant()).unwrap();
        assert_eq!(next.day, Day::Tomorrow);
        assert_eq!(next.event, *tomorrow.first());
    }

    #[test]
    fn test_after_tomorrows_isha_has_no_upcoming_event() {
        let (today, tomorrow) = window();
        let now = tomorrow.last().instant() + Duration::minutes(1);
        assert_eq!(
            resolve_next(&today, &tomorrow, now),
            Err(ScheduleError::NoUpcomingEvent { now })
        );
    }
}
