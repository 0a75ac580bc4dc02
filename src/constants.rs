//! Application-wide constants and defaults.

use std::time::Duration;

// # Application Defaults

/// Countdown cadence.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

pub const APP_DIR_NAME: &str = "adhanr";
pub const CONFIG_FILE_NAME: &str = "adhanr.toml";

pub const DEFAULT_METHOD: &str = "muslim_world_league";
pub const DEFAULT_MADHAB: &str = "shafi";
pub const DEFAULT_HIGH_LATITUDE_RULE: &str = "middle_of_the_night";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Coordinates written into a freshly created config (Masjid al-Haram).
pub const DEFAULT_LATITUDE: f64 = 21.4225;
pub const DEFAULT_LONGITUDE: f64 = 39.8262;

// # Validation Limits

pub const MINIMUM_LATITUDE: f64 = -90.0;
pub const MAXIMUM_LATITUDE: f64 = 90.0;
pub const MINIMUM_LONGITUDE: f64 = -180.0;
pub const MAXIMUM_LONGITUDE: f64 = 180.0;

/// Oracle instants further than this from the requested date's midnight UTC
/// are treated as a failed calculation (polar day or night).
pub const MAXIMUM_EVENT_DRIFT_HOURS: i64 = 36;

// # Exit Codes

pub const EXIT_FAILURE: i32 = 1;
