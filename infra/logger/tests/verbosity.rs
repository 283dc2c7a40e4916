use tracing::Level;
use uni_logger::{LevelFilter, Logger};

#[test]
fn single_verbose_flag_enables_debug_on_stderr_only() {
    let logger = Logger::builder()
        .name("uni-cli")
        .console(true)
        .ansi(false)
        .level(Logger::level_for_verbosity(1))
        .init()
        .expect("logger should initialize");

    assert!(logger.guard().is_none(), "console output needs no file worker");

    if std::env::var_os("RUST_LOG").is_none() {
        assert!(tracing::enabled!(Level::DEBUG), "-v should surface resolver debug events");
        assert!(!tracing::enabled!(Level::TRACE), "-v alone should keep trace events off");
    }
    assert_eq!(Logger::level_for_verbosity(0), LevelFilter::INFO);
}
