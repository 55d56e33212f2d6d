mod composer;
mod normalizer;
mod ranking;
mod severity;
mod types;

pub(crate) use composer::compose;
pub(crate) use normalizer::normalize;
pub(crate) use ranking::{rank, ALERT_PRIORITY};
pub(crate) use severity::select_severity;
pub(crate) use types::{AlertDecision, EvaluatedVolume, Severity, Thresholds, VolumeSample};

use crate::format::human_bytes;
use tracing::{debug, warn};

/// Whether a normalized volume belongs in the alerting set.
pub(crate) fn trips_threshold(volume: &EvaluatedVolume, thresholds: &Thresholds) -> bool {
    volume.overcommitted_percent > i64::from(thresholds.overcommit_percent)
        || volume.used_percent > i64::from(thresholds.warning_percent)
        || volume.used_percent > i64::from(thresholds.critical_percent)
}

fn log_volume(v: &EvaluatedVolume) {
    debug!(
        "{}: Free {}[{}%], Used {}[{}%], Uncommitted {}[{}%], Total {} (Overcommitted {}%)",
        v.name,
        human_bytes(v.free_space_bytes),
        v.free_percent,
        human_bytes(v.used_bytes),
        v.used_percent,
        human_bytes(v.uncommitted_bytes),
        v.uncommitted_percent,
        human_bytes(v.capacity_bytes),
        v.overcommitted_percent,
    );
}

/// Run one check over a snapshot: normalize, collect alerting volumes,
/// rank them, pick a severity and render the status line.
pub(crate) fn evaluate(samples: &[VolumeSample], thresholds: &Thresholds) -> AlertDecision {
    let mut alerting = Vec::new();

    for sample in samples {
        let Some(volume) = normalize(sample) else {
            debug!("Skipping datastore {} with unusable capacity {:?}", sample.name, sample.capacity_bytes);
            continue;
        };

        if volume.used_percent < 0 {
            warn!(
                "Datastore {} reports more free space than capacity ({} > {})",
                volume.name,
                human_bytes(volume.free_space_bytes),
                human_bytes(volume.capacity_bytes)
            );
        }
        log_volume(&volume);

        if trips_threshold(&volume, thresholds) {
            alerting.push(volume);
        }
    }

    debug!("{} of {} datastores alerting", alerting.len(), samples.len());

    let ranked = rank(alerting, &ALERT_PRIORITY);
    let severity = select_severity(&ranked, thresholds);
    let message = compose(severity, &ranked, thresholds);

    AlertDecision { severity, message }
}
