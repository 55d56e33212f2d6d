use super::types::{EvaluatedVolume, VolumeSample};

/// Whole percent of `capacity` that `part` represents, truncated toward zero.
///
/// The ratio is taken before scaling by 100, in f64, and the cast saturates
/// at the `i64` bounds.
fn whole_percent(part: f64, capacity: f64) -> i64 {
    ((part / capacity) * 100.0) as i64
}

/// Derive percentages and byte deltas for a sample.
///
/// Returns `None` when the capacity is unknown, zero, negative or not finite;
/// such samples take no further part in the run.
pub(crate) fn normalize(sample: &VolumeSample) -> Option<EvaluatedVolume> {
    let capacity = sample.capacity_bytes.filter(|c| c.is_finite() && *c > 0.0)?;

    let free_percent = whole_percent(sample.free_space_bytes, capacity);
    let overcommitted_bytes = sample.uncommitted_bytes - sample.free_space_bytes;

    Some(EvaluatedVolume {
        name: sample.name.clone(),
        capacity_bytes: capacity,
        free_space_bytes: sample.free_space_bytes,
        uncommitted_bytes: sample.uncommitted_bytes,
        free_percent,
        used_percent: 100_i64.saturating_sub(free_percent),
        used_bytes: capacity - sample.free_space_bytes,
        uncommitted_percent: whole_percent(sample.uncommitted_bytes, capacity),
        overcommitted_bytes,
        overcommitted_percent: whole_percent(overcommitted_bytes, capacity),
    })
}
