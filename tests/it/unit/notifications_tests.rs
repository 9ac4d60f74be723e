//! Unit tests for notifications module.

use pageforge::notifications::{Toast, ToastManager, ToastVariant};
use std::time::Duration;

#[test]
fn test_toast_creation() {
    let toast = Toast::success("Project saved");
    assert_eq!(toast.message, "Project saved");
    assert_eq!(toast.variant, ToastVariant::Success);
}

#[test]
fn test_toast_ids_are_unique() {
    let a = Toast::info("a");
    let b = Toast::info("b");
    assert_ne!(a.id, b.id);
}

#[test]
fn test_toast_manager() {
    let mut manager = ToastManager::new();
    assert_eq!(manager.count(), 0);
    assert!(manager.latest().is_none());

    manager.push(Toast::success("Message 1"));
    assert_eq!(manager.count(), 1);

    manager.push(Toast::error("Message 2"));
    assert_eq!(manager.count(), 2);
    assert_eq!(manager.latest().unwrap().message, "Message 2");

    manager.clear();
    assert_eq!(manager.count(), 0);
}

#[test]
fn test_toast_not_immediately_expired() {
    let toast = Toast::success("Test").with_duration(Duration::from_secs(10));
    assert!(!toast.is_expired(), "Fresh toast should not be expired");
}

#[test]
fn test_toast_remaining_percent_fresh() {
    let toast = Toast::success("Test").with_duration(Duration::from_secs(10));
    assert!(toast.remaining_percent() > 0.99, "Fresh toast should have ~100% remaining");
}

#[test]
fn test_zero_duration_toast_is_expired() {
    let toast = Toast::warning("gone").with_duration(Duration::ZERO);
    assert!(toast.is_expired());
    assert_eq!(toast.remaining_percent(), 0.0);
}

/// Requires real time to pass, so it is ignored by default.
///
/// To run: cargo test test_toast_expiration -- --ignored
#[test]
#[ignore]
fn test_toast_expiration() {
    let toast = Toast::success("Test").with_duration(Duration::from_millis(1));
    std::thread::sleep(Duration::from_millis(10));
    assert!(toast.is_expired());
}

#[test]
fn test_variant_durations() {
    for variant in [
        ToastVariant::Success,
        ToastVariant::Info,
        ToastVariant::Warning,
        ToastVariant::Error,
    ] {
        assert_eq!(variant.default_duration(), Duration::from_secs(5));
    }
}

#[test]
fn test_variant_alert_classes() {
    assert_eq!(ToastVariant::Success.alert_class(), "alert-success");
    assert_eq!(ToastVariant::Error.alert_class(), "alert-danger");
    assert_eq!(ToastVariant::Info.alert_class(), "alert-info");
    assert_eq!(ToastVariant::Warning.alert_class(), "alert-warning");
}

#[test]
fn test_variant_icons() {
    assert_eq!(ToastVariant::Success.icon(), "✓");
    assert_eq!(ToastVariant::Error.icon(), "✗");
    assert_eq!(ToastVariant::Info.icon(), "ℹ");
    assert_eq!(ToastVariant::Warning.icon(), "⚠");
}

#[test]
fn test_manager_duration_override() {
    let mut manager = ToastManager::with_duration(Duration::from_secs(42));
    manager.push(Toast::error("x").with_duration(Duration::from_secs(1)));
    assert_eq!(manager.toasts()[0].duration, Duration::from_secs(42));
}

#[test]
fn test_toast_manager_remove() {
    let mut manager = ToastManager::new();

    manager.push(Toast::success("Toast 1"));
    let second = manager.push(Toast::info("Toast 2"));
    manager.push(Toast::warning("Toast 3"));
    assert_eq!(manager.count(), 3);

    assert!(manager.remove(second));
    assert!(!manager.remove(second));
    assert_eq!(manager.count(), 2);
    assert!(manager.toasts().iter().all(|t| t.id != second));
}

#[test]
fn test_prune_expired() {
    let mut manager = ToastManager::new();
    manager.push(Toast::info("stays").with_duration(Duration::from_secs(60)));
    manager.push(Toast::info("goes").with_duration(Duration::ZERO));

    assert_eq!(manager.prune_expired(), 1);
    assert_eq!(manager.count(), 1);
    assert_eq!(manager.toasts()[0].message, "stays");
}
