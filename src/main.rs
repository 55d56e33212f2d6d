use anyhow::Result;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod engine;
mod format;
mod snapshot;

#[cfg(test)]
mod tests;

use cli::Cli;
use config::CheckConfig;
use engine::AlertDecision;
use snapshot::NameFilter;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // help/version go to stdout, usage errors to stderr
            let _ = e.print();
            return match cli::usage_error_decision(&e) {
                Some(decision) => report(&decision),
                None => ExitCode::SUCCESS,
            };
        }
    };
    init_tracing(cli.verbose);

    let decision = run(&cli).unwrap_or_else(|e| {
        error!("Check failed: {e:#}");
        AlertDecision::unknown(format!("{e:#}"))
    });
    report(&decision)
}

/// Print the status line and map the decision to the process exit code.
fn report(decision: &AlertDecision) -> ExitCode {
    if writeln!(std::io::stdout().lock(), "{}", decision.message).is_err() {
        return ExitCode::from(engine::Severity::Unknown.exit_code());
    }
    ExitCode::from(decision.exit_code())
}

/// Logs go to stderr so stdout carries only the status line.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("check_datastores={level}")));

    tracing_subscriber::fmt().with_writer(std::io::stderr).with_env_filter(filter).init();
}

fn run(cli: &Cli) -> Result<AlertDecision> {
    let config = CheckConfig::load(cli)?;
    info!(
        "Thresholds: warning={}%, critical={}%, overcommit={}%, max_alerts={}",
        config.thresholds.warning_percent,
        config.thresholds.critical_percent,
        config.thresholds.overcommit_percent,
        config.thresholds.max_alerts
    );

    let filter = NameFilter::new(&config.include, &config.exclude)?;
    let samples = snapshot::select(snapshot::read_snapshot(&config.snapshot)?, &filter);

    let decision = engine::evaluate(&samples, &config.thresholds);
    info!("Check result: {}", decision.severity);
    Ok(decision)
}
