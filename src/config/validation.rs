use super::settings::CheckConfig;
use anyhow::Result;
use tracing::warn;

impl CheckConfig {
    /// Validate configuration values are sane.
    pub(crate) fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        anyhow::ensure!(t.warning_percent <= 100, "warning threshold must be between 0 and 100");
        anyhow::ensure!(t.critical_percent <= 100, "critical threshold must be between 0 and 100");
        anyhow::ensure!(!self.snapshot.is_empty(), "snapshot path must not be empty");

        if t.critical_percent < t.warning_percent {
            warn!(
                "Critical threshold {}% is below warning threshold {}%",
                t.critical_percent, t.warning_percent
            );
        }
        Ok(())
    }
}
