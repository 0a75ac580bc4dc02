//! Configuration system for adhanr.
//!
//! Settings live in `adhanr.toml`, looked up in `$XDG_CONFIG_HOME/adhanr/`
//! (or the directory passed with `--config`). A commented default file is
//! written on first run.
//!
//! ```toml
//! #[Location]
//! latitude = 21.422500     # Geographic latitude (-90 to 90)
//! longitude = 39.826200    # Geographic longitude (-180 to 180)
//!
//! #[Calculation]
//! method = "muslim_world_league" # Calculation method identifier
//! madhab = "shafi"               # Asr shadow rule: "shafi" or "hanafi"
//! high_latitude_rule = "middle_of_the_night" # Fajr/Isha bound when twilight never ends
//!
//! #[Display]
//! time_format = "%H:%M"    # strftime pattern for prayer times
//! # timezone = "Asia/Riyadh" # IANA zone, defaults to system local time
//! ```

pub mod builder;
pub mod loading;
pub mod validation;

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::board::BoardRequest;
use crate::constants::*;
use crate::oracle::{
    CalculationMethod, CalculationParameters, Coordinates, HighLatitudeRule, Madhab,
};
use crate::zone::DisplayZone;

pub use builder::create_default_config;
pub use loading::{get_config_path, load, load_from_path};

#[cfg(test)]
mod tests;

/// Settings loaded from `adhanr.toml`. Every field is optional in the file.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub method: Option<CalculationMethod>,
    pub madhab: Option<Madhab>,
    pub high_latitude_rule: Option<HighLatitudeRule>,
    pub timezone: Option<String>, // IANA name, system local when absent
    pub time_format: Option<String>,
}

impl Config {
    /// Load from the default location or `config_dir`, creating a default file if needed.
    pub fn load(config_dir: Option<&Path>) -> Result<Self> {
        load(config_dir)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        load_from_path(path)
    }

    pub fn get_config_path(config_dir: Option<&Path>) -> Result<PathBuf> {
        get_config_path(config_dir)
    }

    pub fn coordinates(&self) -> Result<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Ok(Coordinates::new(lat, lon)?),
            _ => anyhow::bail!("latitude and longitude must both be set"),
        }
    }

    pub fn parameters(&self) -> CalculationParameters {
        let defaults = CalculationParameters::default();
        CalculationParameters {
            method: self.method.unwrap_or(defaults.method),
            madhab: self.madhab.unwrap_or(defaults.madhab),
            high_latitude_rule: self
                .high_latitude_rule
                .unwrap_or(defaults.high_latitude_rule),
        }
    }

    pub fn zone(&self) -> Result<DisplayZone> {
        DisplayZone::from_name(self.timezone.as_deref())
    }

    pub fn time_format(&self) -> &str {
        self.time_format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT)
    }

    /// Everything a resolution cycle needs from the config.
    pub fn board_request(&self) -> Result<BoardRequest> {
        Ok(BoardRequest {
            coordinates: self.coordinates()?,
            parameters: self.parameters(),
            zone: self.zone()?,
        })
    }

    pub fn log_config(&self, path: &Path) {
        let parameters = self.parameters();
        log_block_start!("Loaded configuration from {}", path.display());
        if let (Some(lat), Some(lon)) = (self.latitude, self.longitude) {
            log_indented!("Location: {lat:.4}°, {lon:.4}°");
        }
        log_indented!("Method: {}", parameters.method);
        log_indented!("Madhab: {}", parameters.madhab.as_str());
        log_indented!(
            "High latitude rule: {}",
            parameters.high_latitude_rule.as_str()
        );
        log_indented!(
            "Timezone: {}",
            self.timezone.as_deref().unwrap_or("local")
        );
    }
}
