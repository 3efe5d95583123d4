use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_min_password_length_below_floor_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _pw = EnvGuard::set("TM_VALIDATION_MIN_PASSWORD_LENGTH", "4");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("min_password_length"));
}

#[test]
#[serial]
fn given_zero_max_languages_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _langs = EnvGuard::set("TM_VALIDATION_MAX_LANGUAGES", "0");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("max_languages"));
}

#[test]
#[serial]
fn given_limits_at_bounds_when_validate_then_ok() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _name = EnvGuard::set("TM_VALIDATION_MAX_NAME_LENGTH", "500");
    let _text = EnvGuard::set("TM_VALIDATION_MAX_TEXT_LENGTH", "1");
    let _len = EnvGuard::set("TM_VALIDATION_MAX_LANGUAGE_LENGTH", "200");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_login_window_zero_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _window = EnvGuard::set("TM_RATE_LIMIT_LOGIN_WINDOW_SECS", "0");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("login_window_secs"));
}
