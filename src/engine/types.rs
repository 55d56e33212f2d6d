use std::fmt;

/// Raw capacity figures for one datastore, as reported by the collector.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VolumeSample {
    pub name: String,
    /// Total size in bytes. `None` when the collector could not report it.
    pub capacity_bytes: Option<f64>,
    pub free_space_bytes: f64,
    /// Space promised to consumers but not yet physically allocated.
    pub uncommitted_bytes: f64,
}

/// A sample with its derived whole-percent figures.
///
/// Percentages are truncated toward zero and are not clamped: a sample that
/// reports more free space than capacity yields a negative `used_percent`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EvaluatedVolume {
    pub name: String,
    pub capacity_bytes: f64,
    pub free_space_bytes: f64,
    pub uncommitted_bytes: f64,
    pub free_percent: i64,
    pub used_percent: i64,
    pub used_bytes: f64,
    pub uncommitted_percent: i64,
    /// Uncommitted minus free space. Negative means not overcommitted.
    pub overcommitted_bytes: f64,
    pub overcommitted_percent: i64,
}

/// Alerting thresholds for one evaluation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Thresholds {
    /// Used-space percentage that raises a WARNING.
    pub warning_percent: u32,
    /// Used-space percentage that raises a CRITICAL.
    pub critical_percent: u32,
    /// Overcommit percentage that must be exceeded to alert.
    pub overcommit_percent: u32,
    /// Index bound for rendered alerts; up to `max_alerts + 1` are shown.
    pub max_alerts: usize,
}

/// Overall check result, in the monitoring plugin exit-code encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Severity {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl Severity {
    /// Process exit code understood by Nagios-compatible schedulers.
    pub(crate) const fn exit_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Warning => 1,
            Self::Critical => 2,
            Self::Unknown => 3,
        }
    }

    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Warning => "WARNING",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single output of a check run: a status line and its severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlertDecision {
    pub severity: Severity,
    pub message: String,
}

impl AlertDecision {
    /// A run that could not be evaluated at all (bad input, bad config).
    pub(crate) fn unknown(reason: impl fmt::Display) -> Self {
        Self { severity: Severity::Unknown, message: format!("{}: {reason}", Severity::Unknown) }
    }

    pub(crate) const fn exit_code(&self) -> u8 {
        self.severity.exit_code()
    }
}
