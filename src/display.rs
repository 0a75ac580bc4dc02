//! Human and JSON rendering of a prayer board.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::board::PrayerBoard;
use crate::countdown::CountdownState;
use crate::prayer::{Day, DisplayRecord, PrayerKey};
use crate::zone::DisplayZone;

/// Date in the "15th January, 2024" style.
pub fn ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix} {}", date.format("%B, %Y"))
}

/// Print both days of the board as a logger block.
pub fn print_board(board: &PrayerBoard, zone: &DisplayZone, time_format: &str) {
    log_block_start!("{}", ordinal_date(board.date()));
    for day in [Day::Today, Day::Tomorrow] {
        log_block_start!("{}", if day == Day::Today { "Today" } else { "Tomorrow" });
        let highlighted = board.next_key_on(day);
        for record in board.records(day) {
            log_indented!("{}", record_line(&record, highlighted, zone, time_format));
        }
    }
}

fn record_line(
    record: &DisplayRecord,
    highlighted: Option<PrayerKey>,
    zone: &DisplayZone,
    time_format: &str,
) -> String {
    let marker = if highlighted == Some(record.id) { "▶" } else { " " };
    format!(
        "{marker} {:<8} {}",
        record.label,
        zone.format(record.time, time_format)
    )
}

/// Headline for the next prayer, e.g. "Maghrib 18:00 (today)".
pub fn next_headline(board: &PrayerBoard, zone: &DisplayZone, time_format: &str) -> String {
    let next = board.next();
    format!(
        "{} {} ({})",
        next.event.label(),
        zone.format(next.event.instant(), time_format),
        next.day
    )
}

/// The live countdown line.
pub fn countdown_line(state: &CountdownState) -> String {
    format!("Next prayer in {}", state.display())
}

#[derive(Debug, Serialize)]
pub struct NextView {
    pub id: PrayerKey,
    pub label: String,
    pub time: DateTime<Utc>,
    pub day: Day,
    pub countdown: String,
}

/// Machine-readable snapshot of a board.
#[derive(Debug, Serialize)]
pub struct BoardView {
    pub date: NaiveDate,
    pub timezone: String,
    pub today: Vec<DisplayRecord>,
    pub tomorrow: Vec<DisplayRecord>,
    pub next: NextView,
}

impl BoardView {
    pub fn new(board: &PrayerBoard, zone: &DisplayZone, now: DateTime<Utc>) -> Self {
        let next = board.next();
        Self {
            date: board.date(),
            timezone: zone.to_string(),
            today: board.records(Day::Today),
            tomorrow: board.records(Day::Tomorrow),
            next: NextView {
                id: next.event.key(),
                label: next.event.label().to_string(),
                time: next.event.instant(),
                day: next.day,
                countdown: CountdownState::at(next.event.instant(), now)
                    .display()
                    .to_string(),
            },
        }
    }
}
