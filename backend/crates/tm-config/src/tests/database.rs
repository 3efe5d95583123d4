use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, DatabaseConfig};

use std::path::Path;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

fn with_url(url: &str) -> DatabaseConfig {
    DatabaseConfig {
        url: url.to_string(),
        ..Default::default()
    }
}

#[test]
fn given_relative_url_when_resolved_then_joined_to_config_dir() {
    let resolved = with_url("sqlite://teammate.db").resolved_url(Path::new("/srv/tm"));
    assert_that!(resolved.as_str(), eq("sqlite:///srv/tm/teammate.db"));
}

#[test]
fn given_relative_url_with_query_when_resolved_then_query_kept() {
    let resolved = with_url("sqlite:data/tm.db?mode=rwc").resolved_url(Path::new("/srv/tm"));
    assert_that!(resolved.as_str(), eq("sqlite:///srv/tm/data/tm.db?mode=rwc"));
}

#[test]
fn given_absolute_or_memory_url_when_resolved_then_unchanged() {
    let dir = Path::new("/srv/tm");
    assert_that!(
        with_url("sqlite:///var/lib/tm.db").resolved_url(dir).as_str(),
        eq("sqlite:///var/lib/tm.db")
    );
    assert_that!(
        with_url("sqlite::memory:").resolved_url(dir).as_str(),
        eq("sqlite::memory:")
    );
}

#[test]
#[serial]
fn given_non_sqlite_url_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();
    let _url = EnvGuard::set("TM_DATABASE_URL", "postgres://localhost/tm");

    let config = Config::load().unwrap();
    let result = config.validate();

    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("sqlite"));
}

#[test]
#[serial]
fn given_max_connections_out_of_range_when_validate_then_error() {
    let (_temp, _dir, _secret) = setup_config_dir();

    for value in ["0", "101"] {
        let _max = EnvGuard::set("TM_DATABASE_MAX_CONNECTIONS", value);
        let config = Config::load().unwrap();
        assert_that!(config.validate(), err(anything()));
    }

    let _max = EnvGuard::set("TM_DATABASE_MAX_CONNECTIONS", "100");
    let config = Config::load().unwrap();
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_default_url_when_database_url_then_inside_config_dir() {
    let (temp, _dir, _secret) = setup_config_dir();

    let config = Config::load().unwrap();
    let url = config.database_url().unwrap();

    let expected = format!("sqlite://{}", temp.path().join("teammate.db").display());
    assert_that!(url.as_str(), eq(expected.as_str()));
}
