use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_unparseable_port_env_when_load_then_default_kept() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _port = EnvGuard::set("TM_SERVER_PORT", "not-a-number");

    let config = Config::load().unwrap();

    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _port = EnvGuard::set("TM_SERVER_PORT", "80");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_auto_port_allowed() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _port = EnvGuard::set("TM_SERVER_PORT", "0");

    let config = Config::load().unwrap();

    assert!(config.validate().is_ok());
}

#[test]
#[serial]
fn given_log_file_with_path_separator_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _file = EnvGuard::set("TM_LOG_FILE", "../escape.log");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_unknown_log_level_when_parsed_then_info() {
    assert_that!(*LogLevel::from_str("LOUD").unwrap(), eq(LevelFilter::Info));
    assert_that!(*LogLevel::from_str("Trace").unwrap(), eq(LevelFilter::Trace));
}

#[test]
#[serial]
fn given_colored_env_one_when_load_then_true() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _off = EnvGuard::set("TM_LOG_COLORED", "0");
    let config = Config::load().unwrap();
    assert_that!(config.logging.colored, eq(false));

    let _on = EnvGuard::set("TM_LOG_COLORED", "1");
    let config = Config::load().unwrap();
    assert_that!(config.logging.colored, eq(true));
}
