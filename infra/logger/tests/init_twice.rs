use subreg_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn init_twice_returns_subscriber_error() {
    let logger = Logger::builder()
        .name("integration-init-twice")
        .ansi(false)
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");

    assert!(logger.guard().is_none(), "console-only logger should not create a file guard");
    assert!(logger.file().is_none());

    let err = Logger::builder()
        .name("integration-init-twice-second")
        .level(LevelFilter::INFO)
        .init()
        .expect_err("second init should fail");

    assert!(
        matches!(err, LoggerError::Subscriber { .. }),
        "expected subscriber error for second init"
    );
}
