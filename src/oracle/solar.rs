//! Sun-elevation based prayer time calculation.
//!
//! Built on the `sunrise` crate's solar events:
//!
//! | Field      | Event                                              |
//! |------------|----------------------------------------------------|
//! | `fajr`     | morning depression of the method's Fajr angle      |
//! | `sunrise`  | sunrise                                            |
//! | `dhuhr`    | solar transit (midpoint of sunrise and sunset)     |
//! | `asr`      | afternoon elevation where shadow = factor + noon   |
//! | `maghrib`  | sunset                                             |
//! | `isha`     | evening depression, or fixed minutes after sunset  |
//!
//! The `sunrise` crate measures `SolarEvent::Elevation` as a depression: a
//! positive angle is below the horizon. Angle-based Fajr and Isha are bounded
//! by the [`HighLatitudeRule`] share of the night (sunset to next sunrise);
//! where the sun never reaches the angle the bound is used as is.
//!
//! The output also carries `midnight` and `last_third` of the night (measured
//! from sunset to the next day's Fajr). Those are not prayers and are dropped
//! by the projector.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use std::f64::consts::PI;
use sunrise::{SolarDay, SolarEvent};

use super::{CalculationParameters, Coordinates, HighLatitudeRule, IshaRule, ScheduleOracle};
use crate::constants::MAXIMUM_EVENT_DRIFT_HOURS;
use crate::prayer::{RawSchedule, ScheduleError};

/// Oracle backed by astronomical sun position.
#[derive(Debug, Default, Clone, Copy)]
pub struct SolarOracle;

impl SolarOracle {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleOracle for SolarOracle {
    fn query(
        &self,
        coordinates: Coordinates,
        date: NaiveDate,
        parameters: &CalculationParameters,
    ) -> Result<RawSchedule, ScheduleError> {
        let today = Twilight::compute(coordinates, date, parameters)?;
        let tomorrow = Twilight::compute(coordinates, next_date(date)?, parameters)?;

        let dhuhr = match (today.sunrise, today.sunset) {
            (Some(sunrise), Some(sunset)) => Some(sunrise + (sunset - sunrise) / 2),
            _ => None,
        };

        let asr_elevation = asr_elevation(
            coordinates.latitude(),
            solar_declination(date),
            parameters.madhab.shadow_factor(),
        );
        let asr = solar_day(coordinates, date)?.event_time(SolarEvent::Elevation {
            elevation: (-asr_elevation).to_radians(),
            morning: false,
        });

        let (midnight, last_third) = match (today.sunset, tomorrow.fajr) {
            (Some(sunset), Some(next_fajr)) => {
                let night = next_fajr - sunset;
                (Some(sunset + night / 2), Some(sunset + night * 2 / 3))
            }
            _ => (None, None),
        };

        let candidates = [
            ("fajr", today.fajr),
            ("sunrise", today.sunrise),
            ("dhuhr", dhuhr),
            ("asr", checked(date, "asr", asr)),
            ("maghrib", today.sunset),
            ("isha", today.isha),
            ("midnight", midnight),
            ("last_third", last_third),
        ];

        let mut raw = RawSchedule::new();
        for (field, instant) in candidates {
            match instant {
                Some(instant) => raw.insert(field, instant),
                None => log_debug!("No {field} for {date}"),
            }
        }
        Ok(raw)
    }
}

/// Sunrise, sunset and the twilight prayers around them for one date.
struct Twilight {
    fajr: Option<DateTime<Utc>>,
    sunrise: Option<DateTime<Utc>>,
    sunset: Option<DateTime<Utc>>,
    isha: Option<DateTime<Utc>>,
}

impl Twilight {
    fn compute(
        coordinates: Coordinates,
        date: NaiveDate,
        parameters: &CalculationParameters,
    ) -> Result<Self, ScheduleError> {
        let day = solar_day(coordinates, date)?;
        let following = next_date(date)?;
        let next_sunrise = solar_day(coordinates, following)?.event_time(SolarEvent::Sunrise);

        let sunrise = checked(date, "sunrise", day.event_time(SolarEvent::Sunrise));
        let sunset = checked(date, "maghrib", day.event_time(SolarEvent::Sunset));
        let night = match (sunset, checked(following, "sunrise", next_sunrise)) {
            (Some(sunset), Some(next_sunrise)) => Some(next_sunrise - sunset),
            _ => None,
        };
        let rule = parameters.high_latitude_rule;

        let fajr_angle = parameters.method.fajr_angle();
        let fajr = checked(date, "fajr", day.event_time(depression(fajr_angle, true)));
        let fajr = match (sunrise, night) {
            (Some(sunrise), Some(night)) => {
                let earliest = sunrise - night_share(night, rule, fajr_angle);
                Some(fajr.map_or(earliest, |fajr| fajr.max(earliest)))
            }
            _ => fajr,
        };

        let isha = match parameters.method.isha_rule() {
            IshaRule::MinutesAfterMaghrib(minutes) => {
                sunset.map(|sunset| sunset + Duration::minutes(minutes))
            }
            IshaRule::Angle(angle) => {
                let isha = checked(date, "isha", day.event_time(depression(angle, false)));
                match (sunset, night) {
                    (Some(sunset), Some(night)) => {
                        let latest = sunset + night_share(night, rule, angle);
                        Some(isha.map_or(latest, |isha| isha.min(latest)))
                    }
                    _ => isha,
                }
            }
        };

        Ok(Self {
            fajr,
            sunrise,
            sunset,
            isha,
        })
    }
}

fn solar_day(coordinates: Coordinates, date: NaiveDate) -> Result<SolarDay, ScheduleError> {
    let coord = sunrise::Coordinates::new(coordinates.latitude(), coordinates.longitude())
        .ok_or(ScheduleError::InvalidCoordinates {
            latitude: coordinates.latitude(),
            longitude: coordinates.longitude(),
        })?;
    Ok(SolarDay::new(coord, date))
}

fn next_date(date: NaiveDate) -> Result<NaiveDate, ScheduleError> {
    date.succ_opt().ok_or_else(|| ScheduleError::Oracle {
        date,
        reason: "date out of range".to_string(),
    })
}

/// Event for the sun `degrees` below the horizon.
fn depression(degrees: f64, morning: bool) -> SolarEvent {
    SolarEvent::Elevation {
        elevation: degrees.to_radians(),
        morning,
    }
}

/// Part of `night` the rule allows for a twilight of `angle` degrees.
fn night_share(night: Duration, rule: HighLatitudeRule, angle: f64) -> Duration {
    let millis = night.num_milliseconds() as f64 * rule.night_portion(angle);
    Duration::milliseconds(millis.round() as i64)
}

/// Solar declination in degrees for `date` (Spencer's Fourier series).
fn solar_declination(date: NaiveDate) -> f64 {
    let gamma = 2.0 * PI / 365.0 * (date.ordinal0() as f64);
    let radians = 0.006918 - 0.399912 * gamma.cos() + 0.070257 * gamma.sin()
        - 0.006758 * (2.0 * gamma).cos()
        + 0.000907 * (2.0 * gamma).sin()
        - 0.002697 * (3.0 * gamma).cos()
        + 0.00148 * (3.0 * gamma).sin();
    radians.to_degrees()
}

/// Sun elevation in degrees at which an object's shadow equals
/// `shadow_factor` times its length plus its noon shadow.
fn asr_elevation(latitude: f64, declination: f64, shadow_factor: f64) -> f64 {
    let noon_shadow = (latitude - declination).abs().to_radians().tan();
    (1.0 / (shadow_factor + noon_shadow)).atan().to_degrees()
}

fn checked(date: NaiveDate, field: &str, instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if is_plausible(date, instant) {
        Some(instant)
    } else {
        log_debug!("Sun never reaches the {field} angle on {date}");
        None
    }
}

/// Reject instants the solar model produced for a sun that never reaches the
/// requested elevation (they collapse to nonsense dates).
fn is_plausible(date: NaiveDate, instant: DateTime<Utc>) -> bool {
    let Some(midnight) = date.and_hms_opt(0, 0, 0) else {
        return false;
    };
    let offset = instant.naive_utc() - midnight;
    offset.num_hours().abs() <= MAXIMUM_EVENT_DRIFT_HOURS
}
