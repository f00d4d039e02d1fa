use crate::Config;
use crate::tests::{EnvGuard, TEST_SECRET, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error_mentions_jwt_secret() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _removed = EnvGuard::remove("TB_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("TB_AUTH_JWT_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("TB_AUTH_JWT_SECRET", "12345678901234567890123456789012"); // 32 chars

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_lifetime_override_when_loaded_then_value_applies() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("TB_AUTH_JWT_SECRET", TEST_SECRET);
    let _lifetime = EnvGuard::set("TB_AUTH_TOKEN_LIFETIME_MINUTES", "15");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
    assert_eq!(config.auth.token_lifetime_minutes, 15);
}
