mod helpers;
use helpers::{capture_tracing, line_with};
use script_console::config::Config;
use script_console::logging;

// All environment mutation lives in this single test binary and test.
#[test]
fn test_invalid_values_fall_back_and_are_reported() {
    std::env::set_var("SCRIPT_LOG_ANSI", "maybe");
    std::env::set_var("CONSOLE_LOGGER_NAME", "rules");
    let config = Config::load();
    std::env::remove_var("SCRIPT_LOG_ANSI");
    std::env::remove_var("CONSOLE_LOGGER_NAME");

    assert!(config.logging.ansi);
    assert_eq!(config.console.logger_name, "rules");
    assert_eq!(config.fallbacks.len(), 1);
    assert!(config.fallbacks[0].contains("SCRIPT_LOG_ANSI"));

    let output = capture_tracing(|| config.report_fallbacks());
    let line = line_with(&output, "SCRIPT_LOG_ANSI");
    assert!(line.contains("WARN"));
    assert!(line.contains("got 'maybe'"));

    // Installing the global subscriber twice must not panic
    logging::init(&config.logging);
    logging::init(&config.logging);
}
