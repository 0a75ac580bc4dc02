//! # adhanr Library
//!
//! Next-prayer resolution and live countdown, used by the `adhanr` binary.
//!
//! ## Architecture
//!
//! - **Core**: `prayer` (canonical keys, schedules, projector, resolver) and
//!   `countdown` (remaining-time formatting and the ticker session)
//! - **Oracle**: `oracle` for coordinates, calculation methods and the
//!   sun-elevation based prayer time calculation
//! - **Cycle**: `board` runs one today/tomorrow resolution cycle
//! - **Clock**: `time_source` for real, simulated and manual time
//! - **Surface**: `args`, `commands`, `config`, `display`, `zone`, `signals`
//!   and the box-drawing `logger`

// Import macros from logger module for use in all submodules
#[macro_use]
pub mod logger;

pub mod args;
pub mod board;
pub mod commands;
pub mod config;
pub mod constants;
pub mod countdown;
pub mod display;
pub mod oracle;
pub mod prayer;
pub mod signals;
pub mod time_source;
pub mod zone;

pub use board::{BoardRequest, PrayerBoard};
pub use countdown::{CountdownState, CountdownTicker};
pub use prayer::{DailySchedule, Day, NextPrayerPointer, PrayerEvent, PrayerKey, ScheduleError};
