use crate::LogLevel;
use crate::tests::setup_config_dir;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err};
use log::LevelFilter;
use serial_test::serial;

#[test]
fn given_known_level_names_when_parsed_then_filters_match() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("WARN").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str("Debug").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn given_unknown_level_name_when_parsed_then_error_names_it() {
    // When
    let result = LogLevel::from_str("verbose");

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("verbose"));
}

#[test]
#[serial]
fn given_unknown_level_in_config_file_when_loaded_then_load_fails() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "loud"
        "#,
    )
    .unwrap();

    // When
    let result = crate::Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("Unknown log level"));
}

#[test]
#[serial]
fn given_level_in_config_file_when_loaded_then_filter_applies() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = crate::Config::load().unwrap();

    // Then
    assert_eq!(*config.logging.level, LevelFilter::Debug);
}
