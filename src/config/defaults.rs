/// Config files read on every run, in order; missing files are skipped.
pub(super) const DEFAULT_CONFIG_PATHS: [&str; 2] =
    ["/etc/vcenter_datastores.cfg", "./vcenter_local.cfg"];

/// Environment variable naming one more config file to layer on top.
pub(super) const CONFIG_PATH_ENV: &str = "CHECK_DATASTORES_CONFIG";

/// Default used-space warning threshold (%).
pub(super) const DEFAULT_WARNING_PERCENT: u32 = 90;

/// Default used-space critical threshold (%).
pub(super) const DEFAULT_CRITICAL_PERCENT: u32 = 95;

/// Default overcommit threshold (%); any overcommit alerts.
pub(super) const DEFAULT_OVERCOMMIT_PERCENT: u32 = 0;

/// Default alert index bound before the summary clause kicks in.
pub(super) const DEFAULT_MAX_ALERTS: usize = 4;
