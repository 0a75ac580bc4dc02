//! One resolution cycle: query today and tomorrow, project both, pick next.
//!
//! A board is built fresh for every cycle and never survives a change of the
//! calendar date; [`PrayerBoard::is_current`] tells the owner when to rebuild.

use chrono::{DateTime, NaiveDate, Utc};

use crate::oracle::{CalculationParameters, Coordinates, ScheduleOracle};
use crate::prayer::{
    DailySchedule, Day, DisplayRecord, NextPrayerPointer, PrayerKey, ScheduleError,
    build_schedule, project, resolve_next,
};
use crate::zone::DisplayZone;

/// Inputs that stay fixed across cycles.
#[derive(Debug, Clone, Copy)]
pub struct BoardRequest {
    pub coordinates: Coordinates,
    pub parameters: CalculationParameters,
    pub zone: DisplayZone,
}

/// Today's and tomorrow's schedules plus the resolved next prayer.
#[derive(Debug, Clone)]
pub struct PrayerBoard {
    today: DailySchedule,
    tomorrow: DailySchedule,
    next: NextPrayerPointer,
}

impl PrayerBoard {
    /// Run one resolution cycle at `now`.
    pub fn resolve(
        oracle: &dyn ScheduleOracle,
        request: &BoardRequest,
        now: DateTime<Utc>,
    ) -> Result<Self, ScheduleError> {
        let today_date = request.zone.date_of(now);
        let tomorrow_date = today_date
            .succ_opt()
            .ok_or_else(|| ScheduleError::Oracle {
                date: today_date,
                reason: "no following date".to_string(),
            })?;

        let today = query_day(oracle, request, today_date)?;
        let tomorrow = query_day(oracle, request, tomorrow_date)?;
        let next = resolve_next(&today, &tomorrow, now)?;

        log_debug!(
            "Resolved next prayer: {} ({}) at {}",
            next.event.label(),
            next.day,
            next.event.instant()
        );

        Ok(Self {
            today,
            tomorrow,
            next,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.today.date()
    }

    pub fn today(&self) -> &DailySchedule {
        &self.today
    }

    pub fn tomorrow(&self) -> &DailySchedule {
        &self.tomorrow
    }

    pub fn next(&self) -> &NextPrayerPointer {
        &self.next
    }

    /// Display records for one day of the window.
    pub fn records(&self, day: Day) -> Vec<DisplayRecord> {
        match day {
            Day::Today => project(&self.today),
            Day::Tomorrow => project(&self.tomorrow),
        }
    }

    /// Key to highlight in the given day's list, if the next prayer is there.
    pub fn next_key_on(&self, day: Day) -> Option<PrayerKey> {
        (self.next.day == day).then(|| self.next.event.key())
    }

    /// Whether the board still describes the calendar date of `now`.
    pub fn is_current(&self, zone: &DisplayZone, now: DateTime<Utc>) -> bool {
        zone.date_of(now) == self.date()
    }
}

fn query_day(
    oracle: &dyn ScheduleOracle,
    request: &BoardRequest,
    date: NaiveDate,
) -> Result<DailySchedule, ScheduleError> {
    let raw = oracle.query(request.coordinates, date, &request.parameters)?;
    build_schedule(date, &raw)
}
