use thiserror::Error;

/// Failures reading a datastore snapshot. All of them abort the run.
#[derive(Debug, Error)]
pub(crate) enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("datastore '{name}' is missing required field '{field}'")]
    MissingField { name: String, field: &'static str },
}
