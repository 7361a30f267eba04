use std::fs;

use artswap::logging;

struct HostLogger;

impl log::Log for HostLogger {
    fn enabled(&self, _: &log::Metadata) -> bool {
        true
    }

    fn log(&self, _: &log::Record) {}

    fn flush(&self) {}
}

static HOST_LOGGER: HostLogger = HostLogger;

#[test]
fn existing_logger_leaves_log_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("ArtSwap.log");
    fs::write(&log_path, "last run\n").unwrap();

    log::set_logger(&HOST_LOGGER).unwrap();

    assert!(logging::init(&log_path).is_err());
    assert_eq!(fs::read_to_string(&log_path).unwrap(), "last run\n");
}
