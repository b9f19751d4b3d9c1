use std::fs;
use std::time::Duration;
use subreg_logger::{LevelFilter, Logger};
use tempfile::tempdir;

#[test]
fn file_logging_creates_named_log_file() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("nested").join("logs");

    let logger = Logger::builder()
        .name("integration-file-logging")
        .console(false)
        .dir(&log_dir)
        .level(LevelFilter::INFO)
        .init()?;

    assert_eq!(logger.file(), Some(log_dir.join("integration-file-logging.log").as_path()));

    tracing::info!("hello from integration test");
    tracing::debug!("filtered out");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let contents = fs::read_to_string(log_dir.join("integration-file-logging.log"))?;
    assert!(contents.contains("hello from integration test"));
    assert!(!contents.contains("filtered out"));
    assert!(!contents.contains('\u{1b}'), "file output should not carry ANSI escapes");

    Ok(())
}
