use crate::logger;

use tm_config::LogLevel;

use log::LevelFilter;

// The global logger can only be installed once per test binary
#[test]
fn given_log_file_when_initializing_then_records_are_written_to_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tm-server.log");

    logger::initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true).unwrap();
    log::info!("registered user for logger test");
    log::debug!("filtered out below info");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Logger initialized: level=Info"));
    assert!(contents.contains("registered user for logger test"));
    assert!(!contents.contains("filtered out below info"));
}
