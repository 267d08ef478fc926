//! Tracing initialization: log file creation and the global-subscriber
//! single-init contract. Runs in its own test binary because the subscriber
//! is process-global.

use hunter_bot::core::init_tracing;
use tempfile::TempDir;
use tracing::info;

#[test]
fn test_init_tracing_creates_log_file_and_rejects_second_init() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bot.log");
    let path_str = path.to_str().unwrap();

    init_tracing(path_str).unwrap();
    info!("logger smoke test");

    assert!(path.exists());

    // The global subscriber is already set; a second init must fail cleanly.
    let second = dir.path().join("other.log");
    assert!(init_tracing(second.to_str().unwrap()).is_err());
}
