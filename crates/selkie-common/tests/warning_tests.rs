//! Tests for warning deduplication.

use selkie_common::warning::{warn_once, was_warned};

// Each test uses its own message; the warning set is process-wide and
// tests run in parallel.

#[test]
fn test_warn_once_prints_first_time_only() {
    assert!(warn_once("Test", "first-time-only"));
    assert!(!warn_once("Test", "first-time-only"));
    assert!(was_warned("Test", "first-time-only"));
}

#[test]
fn test_same_message_different_component_is_distinct() {
    assert!(warn_once("Alpha", "shared-message"));
    assert!(warn_once("Beta", "shared-message"));
}

#[test]
fn test_unreported_message_is_not_warned() {
    assert!(!was_warned("Test", "never-reported"));
}
