use super::validation::validate_config;
use super::*;
use crate::constants::test_constants::*;
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

fn create_test_config() -> Config {
    Config {
        latitude: Some(TEST_LATITUDE),
        longitude: Some(TEST_LONGITUDE),
        method: Some(CalculationMethod::MuslimWorldLeague),
        madhab: Some(Madhab::Shafi),
        high_latitude_rule: Some(HighLatitudeRule::MiddleOfTheNight),
        timezone: Some(TEST_TIMEZONE.to_string()),
        time_format: Some(TEST_TIME_FORMAT.to_string()),
    }
}

#[test]
fn test_config_validation_basic() {
    assert!(validate_config(&create_test_config()).is_ok());
}

#[test]
fn test_config_validation_coordinates() {
    let mut config = create_test_config();
    config.latitude = Some(91.0);
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.longitude = Some(-180.5);
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.longitude = None;
    let err = validate_config(&config).unwrap_err();
    assert!(err.to_string().contains("together"));

    let mut config = create_test_config();
    config.latitude = None;
    config.longitude = None;
    assert!(validate_config(&config).is_err());
}

#[test]
fn test_config_validation_display_fields() {
    let mut config = create_test_config();
    config.timezone = Some("Nowhere/Atlantis".to_string());
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.time_format = Some("   ".to_string());
    assert!(validate_config(&config).is_err());

    let mut config = create_test_config();
    config.time_format = Some("%I:%M %p".to_string());
    assert!(validate_config(&config).is_ok());
}

#[test]
fn test_defaults_when_fields_omitted() {
    let config = Config {
        latitude: Some(TEST_LATITUDE),
        longitude: Some(TEST_LONGITUDE),
        ..Config::default()
    };
    assert_eq!(config.parameters(), CalculationParameters::default());
    assert_eq!(config.time_format(), DEFAULT_TIME_FORMAT);
    assert_eq!(config.zone().unwrap(), DisplayZone::Local);
}

#[test]
fn test_board_request_from_config() {
    let request = create_test_config().board_request().unwrap();
    assert_eq!(request.coordinates.latitude(), TEST_LATITUDE);
    assert_eq!(request.zone.to_string(), TEST_TIMEZONE);
}

#[test]
fn test_load_from_path_parses_toml() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        format!(
            "latitude = {TEST_LATITUDE}\nlongitude = {TEST_LONGITUDE}\nmethod = \"{TEST_METHOD}\"\nmadhab = \"hanafi\"\n"
        ),
    )
    .unwrap();

    let config = Config::load_from_path(&path).unwrap();
    assert_eq!(config.madhab, Some(Madhab::Hanafi));
    assert_eq!(config.method, Some(CalculationMethod::MuslimWorldLeague));
}

#[test]
fn test_load_from_path_rejects_unknown_method() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "latitude = 1.0\nlongitude = 2.0\nmethod = \"jafari\"\n").unwrap();
    assert!(Config::load_from_path(&path).is_err());
}

#[test]
fn test_load_creates_default_in_custom_dir() {
    let temp_dir = tempdir().unwrap();
    let dir = temp_dir.path().join("custom");

    let config = Config::load(Some(dir.as_path())).unwrap();

    assert!(dir.join(CONFIG_FILE_NAME).exists());
    assert_eq!(config.latitude, Some(DEFAULT_LATITUDE));
    assert_eq!(config.longitude, Some(DEFAULT_LONGITUDE));
    assert_eq!(config.method, Some(CalculationMethod::MuslimWorldLeague));
    assert_eq!(config.timezone, None);
    assert_eq!(
        config.high_latitude_rule,
        Some(HighLatitudeRule::MiddleOfTheNight)
    );
}

#[test]
fn test_high_latitude_rule_reaches_parameters() {
    let config = Config {
        high_latitude_rule: Some(HighLatitudeRule::SeventhOfTheNight),
        ..create_test_config()
    };
    assert_eq!(
        config.parameters().high_latitude_rule,
        HighLatitudeRule::SeventhOfTheNight
    );
}

#[test]
#[serial]
fn test_config_load_default_location() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME);

    let original = std::env::var("XDG_CONFIG_HOME").ok();
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }

    let resolved = Config::get_config_path(None);
    let result = Config::load(None);

    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    assert_eq!(resolved.unwrap(), config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());
}
