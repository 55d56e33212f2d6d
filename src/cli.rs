use crate::engine::AlertDecision;
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Nagios monitoring check for vCenter datastores.
///
/// Reads a JSON snapshot of datastore summaries and reports used-space and
/// overcommit alerts as a single status line with a plugin exit code
/// (0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN).
#[derive(Parser, Debug, Clone, Default)]
#[command(
    author,
    version,
    about = "Nagios monitoring check for vCenter datastores",
    after_help = "Example: check-datastores -c /etc/datastores.cfg -s datastores.json"
)]
pub(crate) struct Cli {
    /// Verbose output, use more v's to increase level.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Additional configuration file (KEY="VALUE" lines).
    #[arg(short = 'c', long = "configuration", value_name = "FILE")]
    pub configuration: Option<PathBuf>,

    /// JSON snapshot of datastore summaries, `-` for stdin.
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<String>,

    /// Include datastores matching these patterns.
    ///
    /// Patterns use shell wildcards: `*` matches any run of characters and
    /// `?` a single character.
    #[arg(short, long, num_args = 1.., value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Exclude datastores matching these patterns; excludes override includes.
    #[arg(short = 'x', long, num_args = 1.., value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Warning threshold in percent of used space.
    #[arg(short = 'W', long, value_name = "%")]
    pub warning: Option<u32>,

    /// Critical threshold in percent of used space.
    #[arg(short = 'C', long, value_name = "%")]
    pub critical: Option<u32>,

    /// Alert if any datastore is overcommitted by more than this percentage.
    #[arg(short = 'O', long, value_name = "%")]
    pub overcommitted: Option<u32>,

    /// Number of alerts to show before cutting off output and abbreviating.
    #[arg(short, long = "max-alerts", value_name = "NUMBER")]
    pub max_alerts: Option<usize>,
}

/// Status line for a command-line error, so a broken invocation reports
/// UNKNOWN instead of clap's exit code 2. `None` for help and version output.
pub(crate) fn usage_error_decision(err: &clap::Error) -> Option<AlertDecision> {
    match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => None,
        _ => {
            let rendered = err.to_string();
            let reason = rendered.lines().next().unwrap_or_default().trim_start_matches("error: ");
            Some(AlertDecision::unknown(format!("invalid arguments: {reason}")))
        }
    }
}
