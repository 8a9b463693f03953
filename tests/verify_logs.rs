//! End-to-end verification scenarios: exercise code under test with a
//! recording subscriber installed, then assert on the calls it logged.

use tracing_verify::capture;

/// Stand-in for production code that logs once at each severity.
struct ReportGenerator;

impl ReportGenerator {
    fn run(&self) {
        tracing::debug!("DEBUG log");
        tracing::info!("INFO log");
        tracing::warn!("WARNING log");
        tracing::error!("ERROR log");
    }
}

#[test]
fn at_least_one_wrappers_find_their_level() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    logs.verify_at_least_one_debug_log_contains("DEBUG").unwrap();
    logs.verify_at_least_one_info_log_contains("INFO").unwrap();
    logs.verify_at_least_one_warn_log_contains("WARNING").unwrap();
    logs.verify_at_least_one_error_log_contains("ERROR").unwrap();
}

#[test]
fn at_least_one_wrappers_fail_on_absent_message() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    assert!(logs.verify_at_least_one_debug_log_contains("no message").is_err());
    assert!(logs.verify_at_least_one_info_log_contains("no message").is_err());
    assert!(logs.verify_at_least_one_warn_log_contains("no message").is_err());
    assert!(logs.verify_at_least_one_error_log_contains("no message").is_err());
}

#[test]
fn count_wrappers_require_the_exact_count() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    logs.verify_debug_log_contains("DEBUG", 1).unwrap();
    logs.verify_info_log_contains("INFO", 1).unwrap();
    logs.verify_warn_log_contains("WARNING", 1).unwrap();
    logs.verify_error_log_contains("ERROR", 1).unwrap();

    assert!(logs.verify_debug_log_contains("DEBUG", 2).is_err());
    assert!(logs.verify_info_log_contains("INFO", 2).is_err());
    assert!(logs.verify_warn_log_contains("WARNING", 2).is_err());
    assert!(logs.verify_error_log_contains("ERROR", 2).is_err());
}

#[test]
fn wrappers_do_not_match_across_levels() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    // Every message contains "log", but only one per level.
    logs.verify_debug_log_contains("log", 1).unwrap();
    assert!(logs.verify_at_least_one_error_log_contains("DEBUG").is_err());
}

#[test]
fn any_level_forms_see_the_whole_history() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    logs.verify_log_contains("log").unwrap();
    logs.verify_log_contains_times("log", 4).unwrap();
    assert!(logs.verify_log_contains_times("log", 3).is_err());
    assert!(logs.verify_log_contains("never logged").is_err());
}

#[test]
fn verifications_chain_like_the_logger_they_inspect() {
    let (logs, _guard) = capture();

    ReportGenerator.run();

    logs.verify_at_least_one_debug_log_contains("DEBUG")
        .and_then(|logs| logs.verify_at_least_one_info_log_contains("INFO"))
        .and_then(|logs| logs.verify_error_log_contains("ERROR", 1))
        .unwrap();
}

#[test]
fn histories_are_isolated_between_captures() {
    {
        let (logs, _guard) = capture();
        tracing::info!("first capture");
        logs.verify_log_contains_times("capture", 1).unwrap();
    }

    let (logs, _guard) = capture();
    tracing::info!("second capture");

    logs.verify_log_contains_times("capture", 1).unwrap();
    assert!(logs.verify_log_contains("first").is_err());
}
