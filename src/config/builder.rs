//! Default configuration file creation.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::constants::*;

/// Write a commented default config to `path`, creating parent directories.
pub fn create_default_config(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    let content = default_config_content();
    fs::write(path, content)
        .with_context(|| format!("Failed to write default config to {}", path.display()))?;

    log_block_start!("Created default configuration: {}", path.display());
    log_warning!("Edit latitude and longitude to match your location");
    Ok(())
}

fn default_config_content() -> String {
    ConfigBuilder::new()
        .add_section("Location")
        .add_setting(
            "latitude",
            &format!("{DEFAULT_LATITUDE:.6}"),
            "Geographic latitude (-90 to 90)",
        )
        .add_setting(
            "longitude",
            &format!("{DEFAULT_LONGITUDE:.6}"),
            "Geographic longitude (-180 to 180)",
        )
        .add_section("Calculation")
        .add_setting(
            "method",
            &format!("\"{DEFAULT_METHOD}\""),
            "Calculation method identifier",
        )
        .add_setting(
            "madhab",
            &format!("\"{DEFAULT_MADHAB}\""),
            "Asr shadow rule: \"shafi\" or \"hanafi\"",
        )
        .add_setting(
            "high_latitude_rule",
            &format!("\"{DEFAULT_HIGH_LATITUDE_RULE}\""),
            "Fajr/Isha bound: middle_of_the_night, seventh_of_the_night, twilight_angle",
        )
        .add_section("Display")
        .add_setting(
            "time_format",
            &format!("\"{DEFAULT_TIME_FORMAT}\""),
            "strftime pattern for prayer times",
        )
        .add_comment("timezone = \"Asia/Riyadh\"", "IANA zone, defaults to system local time")
        .build()
}

struct ConfigBuilder {
    entries: Vec<ConfigEntry>,
}

enum ConfigEntry {
    Section(String),
    Setting { line: String, comment: String },
}

impl ConfigBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    fn add_section(mut self, title: &str) -> Self {
        self.entries.push(ConfigEntry::Section(format!("#[{title}]")));
        self
    }

    fn add_setting(mut self, key: &str, value: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("{key} = {value}"),
            comment: format!("# {comment}"),
        });
        self
    }

    /// A setting that is shown but left disabled.
    fn add_comment(mut self, line: &str, comment: &str) -> Self {
        self.entries.push(ConfigEntry::Setting {
            line: format!("# {line}"),
            comment: format!("# {comment}"),
        });
        self
    }

    fn build(self) -> String {
        // Align comments one space past the longest setting line
        let max_width = self
            .entries
            .iter()
            .filter_map(|entry| match entry {
                ConfigEntry::Setting { line, .. } => Some(line.len()),
                ConfigEntry::Section(_) => None,
            })
            .max()
            .unwrap_or(0)
            + 1;

        let mut result = Vec::new();
        let mut first_section = true;

        for entry in self.entries {
            match entry {
                ConfigEntry::Section(title) => {
                    if !first_section {
                        result.push(String::new());
                    }
                    result.push(title);
                    first_section = false;
                }
                ConfigEntry::Setting { line, comment } => {
                    let padding = " ".repeat(max_width - line.len());
                    result.push(format!("{line}{padding}{comment}"));
                }
            }
        }

        let mut content = result.join("\n");
        content.push('\n');
        content
    }
}
