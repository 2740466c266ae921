//! Best-effort routing specs

use crate::prelude::*;

fn router_with(recovery: &FakeSink, recovery_enabled: bool) -> HistoryEventRouter {
    HistoryEventRouter::new(
        &HistoryConfig {
            recovery_enabled,
            timeline_enabled: false,
            ..HistoryConfig::default()
        },
        Sinks::none().with_recovery(recovery.clone()),
    )
    .unwrap()
}

#[test]
fn route_returns_normally_when_recovery_always_fails() {
    let recovery = FakeSink::failing("disk full");
    let router = router_with(&recovery, true);

    router.route(&submitted());
    router.route(&finished());

    assert_eq!(recovery.handled().len(), 2);
}

#[test]
fn degraded_recovery_is_only_visible_through_polling() {
    let recovery = FakeSink::new();
    let router = router_with(&recovery, true);

    router.route(&submitted());
    assert!(!router.has_recovery_failed());

    recovery.set_failed(true);
    recovery.fail_with("log closed");
    router.route(&finished());

    assert!(router.has_recovery_failed());
}

#[test]
fn disabled_recovery_never_reports_failure() {
    let recovery = FakeSink::new();
    recovery.set_failed(true);
    let router = router_with(&recovery, false);

    router.route(&submitted());

    assert!(!router.has_recovery_failed());
    assert!(recovery.calls().is_empty());
}
