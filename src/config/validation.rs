//! Configuration validation functionality.

use anyhow::Result;
use chrono::format::{Item, StrftimeItems};

use super::Config;
use crate::constants::*;

/// Reject configurations that cannot produce a schedule or a display.
pub fn validate_config(config: &Config) -> Result<()> {
    match (config.latitude, config.longitude) {
        (Some(_), Some(_)) => {}
        (None, None) => anyhow::bail!(
            "latitude and longitude are required to calculate prayer times"
        ),
        _ => anyhow::bail!("latitude and longitude must be set together"),
    }

    if let Some(lat) = config.latitude
        && !(MINIMUM_LATITUDE..=MAXIMUM_LATITUDE).contains(&lat)
    {
        anyhow::bail!("latitude must be between -90 and 90 degrees (got {})", lat);
    }

    if let Some(lon) = config.longitude
        && !(MINIMUM_LONGITUDE..=MAXIMUM_LONGITUDE).contains(&lon)
    {
        anyhow::bail!(
            "longitude must be between -180 and 180 degrees (got {})",
            lon
        );
    }

    if let Some(name) = config.timezone.as_deref() {
        crate::zone::DisplayZone::from_name(Some(name))?;
    }

    if let Some(pattern) = config.time_format.as_deref() {
        validate_time_format(pattern)?;
    }

    Ok(())
}

fn validate_time_format(pattern: &str) -> Result<()> {
    if pattern.trim().is_empty() {
        anyhow::bail!("time_format must not be empty");
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        anyhow::bail!("time_format '{}' is not a valid strftime pattern", pattern);
    }
    Ok(())
}
