use super::types::{EvaluatedVolume, Severity, Thresholds};

/// Token monitoring front-ends split the status line on.
pub(crate) const CLAUSE_SEPARATOR: &str = " | ";

const UNKNOWN_NOTICE: &str = "Contact monitoring sysadmin";

fn volume_clause(volume: &EvaluatedVolume, thresholds: &Thresholds) -> String {
    if volume.overcommitted_percent > i64::from(thresholds.overcommit_percent) {
        format!("{} overcommitted by {}%", volume.name, volume.overcommitted_percent)
    } else {
        format!("{} is {}% full", volume.name, volume.used_percent)
    }
}

/// Render the status line for a ranked set of alerting volumes.
///
/// `max_alerts` is an inclusive index bound, so up to `max_alerts + 1`
/// volumes are listed. When more were ranked than listed, a summary clause
/// reports `len - max_alerts - 1` further datastores.
pub(crate) fn compose(severity: Severity, ranked: &[EvaluatedVolume], thresholds: &Thresholds) -> String {
    if severity == Severity::Ok {
        return format!("{severity}: All datastores below {}% used space", thresholds.warning_percent);
    }

    let shown = thresholds.max_alerts.saturating_add(1);
    let mut clauses = Vec::with_capacity(shown.min(ranked.len()) + 2);

    if severity == Severity::Unknown {
        clauses.push(UNKNOWN_NOTICE.to_string());
    }

    clauses.extend(ranked.iter().take(shown).map(|v| volume_clause(v, thresholds)));

    if ranked.len() > shown {
        let more = ranked.len() - thresholds.max_alerts - 1;
        clauses.push(format!("Plus alerts on {more} more datastores not shown."));
    }

    format!("{severity}: {}", clauses.join(CLAUSE_SEPARATOR))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds(max_alerts: usize) -> Thresholds {
        Thresholds { warning_percent: 90, critical_percent: 95, overcommit_percent: 0, max_alerts }
    }

    fn volume(name: &str, used: i64, overcommitted: i64) -> EvaluatedVolume {
        EvaluatedVolume {
            name: name.to_string(),
            capacity_bytes: 100.0,
            free_space_bytes: (100 - used) as f64,
            uncommitted_bytes: 0.0,
            free_percent: 100 - used,
            used_percent: used,
            used_bytes: used as f64,
            uncommitted_percent: 0,
            overcommitted_bytes: overcommitted as f64,
            overcommitted_percent: overcommitted,
        }
    }

    fn full_volumes(count: usize) -> Vec<EvaluatedVolume> {
        (0..count).map(|i| volume(&format!("ds{i}"), 96, -96)).collect()
    }

    #[test]
    fn ok_message_names_warning_threshold() {
        assert_eq!(
            compose(Severity::Ok, &[], &thresholds(4)),
            "OK: All datastores below 90% used space"
        );
    }

    #[test]
    fn clause_depends_on_overcommit() {
        let ranked = [volume("vmfs-a", 50, 10), volume("vmfs-b", 96, -96)];
        assert_eq!(
            compose(Severity::Warning, &ranked, &thresholds(4)),
            "WARNING: vmfs-a overcommitted by 10% | vmfs-b is 96% full"
        );
    }

    #[test]
    fn unknown_lists_volumes_after_notice() {
        let ranked = [volume("odd", 10, -10)];
        assert_eq!(
            compose(Severity::Unknown, &ranked, &thresholds(4)),
            "UNKNOWN: Contact monitoring sysadmin | odd is 10% full"
        );
    }

    #[test]
    fn renders_max_alerts_plus_one_without_summary() {
        let message = compose(Severity::Critical, &full_volumes(5), &thresholds(4));
        assert_eq!(message.matches(" is 96% full").count(), 5);
        assert!(!message.contains("Plus alerts"));
    }

    #[test]
    fn summary_counts_volumes_beyond_bound() {
        let message = compose(Severity::Critical, &full_volumes(6), &thresholds(4));
        assert_eq!(message.matches(" is 96% full").count(), 5);
        assert!(message.ends_with(" | Plus alerts on 1 more datastores not shown."));
        assert!(!message.contains("ds5"));

        let message = compose(Severity::Critical, &full_volumes(9), &thresholds(4));
        assert!(message.ends_with("Plus alerts on 4 more datastores not shown."));
    }

    #[test]
    fn zero_max_alerts_still_shows_one() {
        let message = compose(Severity::Critical, &full_volumes(3), &thresholds(0));
        assert_eq!(
            message,
            "CRITICAL: ds0 is 96% full | Plus alerts on 2 more datastores not shown."
        );
    }
}
