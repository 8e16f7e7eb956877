#![allow(clippy::unwrap_used, clippy::expect_used)]

use scriptman_core::errors::{ExError, ExErrorKind, ScriptManError};
use scriptman_core::logging_facility::test_capture::init_test_capture;
use scriptman_core::{log_op_end, log_op_error, log_op_start};
use scriptman_core::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_ERR_MESSAGE,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, script_name = "build");

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);

    let event = &capture.events_for(op_name)[0];
    assert_eq!(event.field("script_name"), Some("build"));
    assert!(event
        .component
        .as_deref()
        .unwrap_or_default()
        .contains("logging_facility_tests"));
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42, removed_count = 3);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
    assert_eq!(events[0].field("removed_count"), Some("3"));
}

#[test]
fn test_log_op_error_from_domain_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ScriptManError::ScriptNotFound {
        name: "deploy".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(events[0].field(FIELD_ERR_MESSAGE), Some("Script not found"));
}

#[test]
fn test_log_op_error_from_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_4";

    let err = ExError::new(ExErrorKind::Storage).with_op("sqlite");
    log_op_error!(op_name, err, duration_ms = 1, script_path = "/tmp/x.sh");

    let events = capture.events_for(op_name);
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_STORAGE"));
    assert_eq!(events[0].field("script_path"), Some("/tmp/x.sh"));
}

#[test]
fn test_boundary_single_start_end() {
    let capture = init_test_capture();
    let op_name = "test_boundary_unique_5";

    log_op_start!(op_name);
    log_op_end!(op_name, duration_ms = 7);

    let events = capture.events_for(op_name);
    let kinds: Vec<_> = events.iter().filter_map(|e| e.event.as_deref()).collect();
    assert_eq!(kinds, vec![EVENT_START, EVENT_END]);
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_assert_event_exists_fails_for_unknown_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}
