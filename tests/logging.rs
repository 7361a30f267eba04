use std::{fs, thread, time::Duration};

use artswap::logging;

#[test]
fn messages_reach_the_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("ArtSwap.log");

    logging::init(&log_path).unwrap();
    log::warn!("could not use 'Nobody.jpg'");

    // The file is written on a background thread.
    let mut contents = String::new();
    for _ in 0..100 {
        contents = fs::read_to_string(&log_path).unwrap();
        if !contents.is_empty() {
            break;
        }

        thread::sleep(Duration::from_millis(20));
    }

    assert!(contents.contains("[logging] [warning] could not use 'Nobody.jpg'"));

    // Only one logger can be installed.
    assert!(logging::init(dir.path().join("other.log")).is_err());
}
