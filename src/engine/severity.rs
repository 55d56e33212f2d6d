use super::types::{EvaluatedVolume, Severity, Thresholds};

/// Pick the overall severity from the highest-ranked volume alone.
///
/// Checked in order: empty list, used space against critical, used space
/// against warning, overcommit. A non-empty list matching none of them is
/// reported as `Unknown`.
pub(crate) fn select_severity(ranked: &[EvaluatedVolume], thresholds: &Thresholds) -> Severity {
    let Some(top) = ranked.first() else {
        return Severity::Ok;
    };

    if top.used_percent >= i64::from(thresholds.critical_percent) {
        Severity::Critical
    } else if top.used_percent >= i64::from(thresholds.warning_percent) {
        Severity::Warning
    } else if top.overcommitted_percent > i64::from(thresholds.overcommit_percent) {
        Severity::Warning
    } else {
        Severity::Unknown
    }
}
