use humansize::{format_size, BINARY};

/// Human-readable byte quantity for log output, e.g. `1.5 GiB`.
///
/// Negative quantities (overcommit deltas, anomalous samples) keep their sign.
pub(crate) fn human_bytes(bytes: f64) -> String {
    if bytes < 0.0 {
        return format!("-{}", format_size(bytes.abs() as u64, BINARY));
    }
    format_size(bytes as u64, BINARY)
}
