//! Calendar zone used to decide which date is "today" and to print instants.

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;

/// Either the system's local zone or a named IANA zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayZone {
    Local,
    Named(Tz),
}

impl DisplayZone {
    /// Parse an optional IANA name; `None` means system local time.
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name {
            None => Ok(DisplayZone::Local),
            Some(name) => name
                .parse::<Tz>()
                .map(DisplayZone::Named)
                .map_err(|e| anyhow::anyhow!("unknown timezone '{}': {}", name, e)),
        }
    }

    /// Calendar date of `instant` in this zone.
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            DisplayZone::Local => instant.with_timezone(&Local).date_naive(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).date_naive(),
        }
    }

    /// Format `instant` with a strftime pattern in this zone.
    pub fn format(&self, instant: DateTime<Utc>, pattern: &str) -> String {
        match self {
            DisplayZone::Local => instant.with_timezone(&Local).format(pattern).to_string(),
            DisplayZone::Named(tz) => instant.with_timezone(tz).format(pattern).to_string(),
        }
    }

    /// Parse "YYYY-MM-DD HH:MM:SS" as wall-clock time in this zone.
    pub fn parse_datetime(&self, s: &str) -> Result<DateTime<Utc>> {
        let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .with_context(|| format!("Invalid datetime '{s}'. Use YYYY-MM-DD HH:MM:SS"))?;
        let resolved = match self {
            DisplayZone::Local => Local
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
            DisplayZone::Named(tz) => tz
                .from_local_datetime(&naive)
                .single()
                .map(|dt| dt.with_timezone(&Utc)),
        };
        resolved.ok_or_else(|| anyhow::anyhow!("Ambiguous or invalid time '{}' in {}", s, self))
    }
}

impl fmt::Display for DisplayZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayZone::Local => f.write_str("local"),
            DisplayZone::Named(tz) => write!(f, "{tz}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_zone_date_boundary() {
        let zone = DisplayZone::from_name(Some("Asia/Riyadh")).unwrap();
        // 22:30 UTC is already 01:30 the next day in Riyadh
        let instant = Utc.with_ymd_and_hms(2024, 1, 15, 22, 30, 0).unwrap();
        assert_eq!(zone.date_of(instant), NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(zone.format(instant, "%H:%M"), "01:30");
    }

    #[test]
    fn test_parse_datetime_in_zone() {
        let zone = DisplayZone::from_name(Some("Europe/London")).unwrap();
        let instant = zone.parse_datetime("2024-07-01 12:00:00").unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 7, 1, 11, 0, 0).unwrap());
        assert!(zone.parse_datetime("2024-07-01").is_err());
    }

    #[test]
    fn test_unknown_zone_is_rejected() {
        assert!(DisplayZone::from_name(Some("Mars/Olympus")).is_err());
        assert_eq!(DisplayZone::from_name(None).unwrap(), DisplayZone::Local);
    }
}
