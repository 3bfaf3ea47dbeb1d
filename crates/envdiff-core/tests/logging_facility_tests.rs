#![allow(clippy::unwrap_used, clippy::expect_used)]

use envdiff_core::diff::diff;
use envdiff_core::errors::EnvDiffError;
use envdiff_core::logging_facility::test_capture::init_test_capture;
use envdiff_core::parser::{parse_with, ParseOptions};
use envdiff_core::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use envdiff_core::{log_op_end, log_op_error, log_op_start};
use envdiff_core_types::Sensitive;

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name);

    let start_events = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(start_events, 1, "Should have exactly one start event");
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events();
    let end_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("Should have end event");

    assert_eq!(end_event.fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_log_op_error_includes_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    log_op_error!(op_name, EnvDiffError::EmptyName, duration_ms = 10);

    let events = capture.events();
    let error_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("Should have error event");

    assert_eq!(
        error_event.fields.get("err.code"),
        Some(&"ERR_INVALID_NAME".to_string())
    );
    assert_eq!(
        error_event.fields.get("err.kind"),
        Some(&"InvalidName".to_string())
    );
}

#[test]
fn test_log_macros_with_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_log_macros_fields_unique_4";

    log_op_start!(op_name, path = "old.env");
    log_op_end!(op_name, duration_ms = 1, edit_count = 3u64);

    capture.assert_event_exists(op_name, EVENT_START);
    let events = capture.events();
    let end_event = events
        .iter()
        .find(|e| e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_END))
        .expect("Should have end event");
    assert_eq!(end_event.fields.get("edit_count"), Some(&"3".to_string()));
}

#[test]
#[should_panic(expected = "Expected event")]
fn test_capture_assert_event_exists_fails() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_parse_and_diff_do_not_log_values() {
    let capture = init_test_capture();
    let secret = "s3cr3t-token-value-unique-5";

    let opts = ParseOptions::with_separator(':').unwrap();
    let old = parse_with("TOKEN=old-value", &opts);
    let new = parse_with(&format!("TOKEN={}:old-value", secret), &opts);
    let script = diff(&old, &new);
    assert_eq!(script.len(), 1);

    assert!(
        !capture.any_field_contains(secret),
        "variable values must never reach log events"
    );
}

#[test]
fn test_sensitive_values_are_redacted_in_events() {
    let capture = init_test_capture();
    let secret = "hunter2-unique-6";

    tracing::info!(
        op = "test_sensitive_unique_6",
        event = EVENT_START,
        value = ?Sensitive::new(secret),
    );

    capture.assert_event_exists("test_sensitive_unique_6", EVENT_START);
    assert!(!capture.any_field_contains(secret));
}
