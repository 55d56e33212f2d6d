use crate::engine::{evaluate, Severity, Thresholds, VolumeSample};

fn sample(name: &str, capacity: f64, free: f64, uncommitted: f64) -> VolumeSample {
    VolumeSample {
        name: name.to_string(),
        capacity_bytes: Some(capacity),
        free_space_bytes: free,
        uncommitted_bytes: uncommitted,
    }
}

#[test]
fn test_nearly_full_datastore_is_critical() {
    let decision = evaluate(&[sample("ds-a", 100.0, 5.0, 0.0)], &Thresholds::default());
    assert_eq!(decision.severity, Severity::Critical);
    assert_eq!(decision.exit_code(), 2);
    assert!(decision.message.starts_with("CRITICAL: "));
    assert!(decision.message.contains("ds-a is 95% full"));
}

#[test]
fn test_overcommitted_datastore_is_warning() {
    let decision = evaluate(&[sample("ds-b", 100.0, 50.0, 60.0)], &Thresholds::default());
    assert_eq!(decision.severity, Severity::Warning);
    assert_eq!(decision.exit_code(), 1);
    assert_eq!(decision.message, "WARNING: ds-b overcommitted by 10%");
}

#[test]
fn test_no_alerts_is_ok() {
    let decision = evaluate(&[], &Thresholds::default());
    assert_eq!(decision.severity, Severity::Ok);
    assert_eq!(decision.exit_code(), 0);
    assert_eq!(decision.message, "OK: All datastores below 90% used space");

    let healthy = [sample("ds-c", 1000.0, 600.0, 100.0)];
    assert_eq!(evaluate(&healthy, &Thresholds::default()).severity, Severity::Ok);
}

#[test]
fn test_zero_capacity_is_skipped() {
    let samples = [
        sample("empty", 0.0, 0.0, 0.0),
        VolumeSample { capacity_bytes: None, ..sample("inaccessible", 0.0, 0.0, 0.0) },
        sample("fine", 100.0, 40.0, 0.0),
    ];
    let decision = evaluate(&samples, &Thresholds::default());
    assert_eq!(decision.severity, Severity::Ok);
    assert!(!decision.message.contains("empty"));
}

#[test]
fn test_used_at_warning_is_not_collected() {
    // collection requires used > warning
    let decision = evaluate(&[sample("edge", 100.0, 10.0, 0.0)], &Thresholds::default());
    assert_eq!(decision.severity, Severity::Ok);

    let decision = evaluate(&[sample("over", 100.0, 9.0, 0.0)], &Thresholds::default());
    assert_eq!(decision.severity, Severity::Warning);
    assert_eq!(decision.message, "WARNING: over is 91% full");
}

#[test]
fn test_overcommit_outranks_full_volume() {
    let samples = [sample("full", 100.0, 2.0, 0.0), sample("promised", 100.0, 30.0, 45.0)];
    let decision = evaluate(&samples, &Thresholds::default());
    // top volume is the overcommitted one, so severity comes from it
    assert_eq!(decision.severity, Severity::Warning);
    assert_eq!(decision.message, "WARNING: promised overcommitted by 15% | full is 98% full");
}

#[test]
fn test_equal_volumes_keep_snapshot_order() {
    let samples = [
        sample("one", 100.0, 3.0, 0.0),
        sample("two", 100.0, 3.0, 0.0),
        sample("three", 100.0, 3.0, 0.0),
    ];
    let decision = evaluate(&samples, &Thresholds::default());
    assert_eq!(
        decision.message,
        "CRITICAL: one is 97% full | two is 97% full | three is 97% full"
    );
}

#[test]
fn test_truncation_boundary() {
    let five: Vec<_> = (0..5).map(|i| sample(&format!("ds{i}"), 100.0, 1.0, 0.0)).collect();
    let decision = evaluate(&five, &Thresholds::default());
    assert_eq!(decision.message.matches("% full").count(), 5);
    assert!(!decision.message.contains("Plus alerts"));

    let six: Vec<_> = (0..6).map(|i| sample(&format!("ds{i}"), 100.0, 1.0, 0.0)).collect();
    let decision = evaluate(&six, &Thresholds::default());
    assert_eq!(decision.message.matches("% full").count(), 5);
    assert!(decision.message.ends_with(" | Plus alerts on 1 more datastores not shown."));
}

#[test]
fn test_corrupt_sample_is_reported_not_clamped() {
    let t = Thresholds { overcommit_percent: 100, ..Thresholds::default() };
    let decision = evaluate(&[sample("weird", 100.0, 150.0, 0.0)], &t);
    // used = -50% trips nothing
    assert_eq!(decision.severity, Severity::Ok);
}

#[test]
fn test_inverted_thresholds_check_critical_first() {
    let t = Thresholds { warning_percent: 100, critical_percent: 80, ..Thresholds::default() };
    let decision = evaluate(&[sample("ds", 100.0, 15.0, 0.0)], &t);
    assert_eq!(decision.severity, Severity::Critical);
    assert_eq!(decision.message, "CRITICAL: ds is 85% full");
}
