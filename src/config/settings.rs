use super::defaults::{
    CONFIG_PATH_ENV, DEFAULT_CONFIG_PATHS, DEFAULT_CRITICAL_PERCENT, DEFAULT_MAX_ALERTS,
    DEFAULT_OVERCOMMIT_PERCENT, DEFAULT_WARNING_PERCENT,
};
use crate::cli::Cli;
use crate::engine::Thresholds;
use crate::snapshot::STDIN_PATH;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning_percent: DEFAULT_WARNING_PERCENT,
            critical_percent: DEFAULT_CRITICAL_PERCENT,
            overcommit_percent: DEFAULT_OVERCOMMIT_PERCENT,
            max_alerts: DEFAULT_MAX_ALERTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CheckConfig {
    pub thresholds: Thresholds,
    /// Wildcard patterns; when non-empty only matching datastores are checked.
    pub include: Vec<String>,
    /// Wildcard patterns for datastores to skip. Override `include`.
    pub exclude: Vec<String>,
    /// JSON snapshot path, `-` for stdin.
    pub snapshot: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            thresholds: Thresholds::default(),
            include: Vec::new(),
            exclude: Vec::new(),
            snapshot: STDIN_PATH.to_string(),
        }
    }
}

impl CheckConfig {
    /// Load configuration: defaults, system and local config files, the
    /// file named by `CHECK_DATASTORES_CONFIG`, `-c`, then CLI flags.
    pub(crate) fn load(cli: &Cli) -> Result<Self> {
        let mut layers: Vec<PathBuf> =
            DEFAULT_CONFIG_PATHS.iter().map(PathBuf::from).filter(|p| p.exists()).collect();
        layers.extend(std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));
        layers.extend(cli.configuration.clone());

        Self::from_layers(&layers, cli)
    }

    /// Apply each config file in order (later wins), then the CLI flags.
    /// Every listed file must be readable.
    pub(crate) fn from_layers(files: &[PathBuf], cli: &Cli) -> Result<Self> {
        let mut config = Self::default();
        for path in files {
            config.merge_file(path)?;
        }

        config.apply_cli(cli);
        config.validate()?;
        Ok(config)
    }

    fn merge_file(&mut self, path: &Path) -> Result<()> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        debug!("Applying config file {}", path.display());
        self.parse_ini(&contents);
        Ok(())
    }

    /// Explicit command-line values win over anything read from files.
    pub(crate) fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = cli.warning {
            self.thresholds.warning_percent = v;
        }
        if let Some(v) = cli.critical {
            self.thresholds.critical_percent = v;
        }
        if let Some(v) = cli.overcommitted {
            self.thresholds.overcommit_percent = v;
        }
        if let Some(v) = cli.max_alerts {
            self.thresholds.max_alerts = v;
        }
        if !cli.include.is_empty() {
            self.include.clone_from(&cli.include);
        }
        if !cli.exclude.is_empty() {
            self.exclude.clone_from(&cli.exclude);
        }
        if let Some(path) = &cli.snapshot {
            self.snapshot.clone_from(path);
        }
    }
}
