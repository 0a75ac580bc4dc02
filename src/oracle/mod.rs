//! Prayer time oracle: coordinates + date + method in, raw instants out.
//!
//! The core treats the oracle as an opaque, deterministic function. The
//! [`solar`] implementation derives the instants from sun elevation events;
//! tests substitute fixed tables.

pub mod method;
pub mod solar;

use chrono::NaiveDate;

use crate::constants::*;
use crate::prayer::{RawSchedule, ScheduleError};

pub use method::{CalculationMethod, CalculationParameters, HighLatitudeRule, IshaRule, Madhab};
pub use solar::SolarOracle;

/// Validated geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ScheduleError> {
        let valid = (MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&latitude)
            && (MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&longitude);
        if !valid {
            return Err(ScheduleError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Source of raw prayer instants for one calendar date.
pub trait ScheduleOracle {
    fn query(
        &self,
        coordinates: Coordinates,
        date: NaiveDate,
        parameters: &CalculationParameters,
    ) -> Result<RawSchedule, ScheduleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates_validation() {
        assert!(Coordinates::new(40.7128, -74.0060).is_ok());
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(91.0, 0.0).is_err());
        assert!(Coordinates::new(0.0, -181.0).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }
}
