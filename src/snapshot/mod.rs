mod error;
mod filter;
mod records;

#[cfg(test)]
pub(crate) use error::SnapshotError;
pub(crate) use filter::NameFilter;
pub(crate) use records::parse_snapshot;

use crate::engine::VolumeSample;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{debug, info};

/// Snapshot path meaning "read from standard input".
pub(crate) const STDIN_PATH: &str = "-";

/// Load datastore samples from a JSON file, or stdin for `-`.
pub(crate) fn read_snapshot(path: &str) -> Result<Vec<VolumeSample>> {
    let samples = if path == STDIN_PATH {
        parse_snapshot(io::stdin().lock()).context("Failed to load snapshot from stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("Failed to open snapshot {path}"))?;
        parse_snapshot(BufReader::new(file))
            .with_context(|| format!("Failed to load snapshot {path}"))?
    };

    info!("Loaded {} datastores from {}", samples.len(), path);
    Ok(samples)
}

/// Drop samples whose names the filter rejects.
pub(crate) fn select(samples: Vec<VolumeSample>, filter: &NameFilter) -> Vec<VolumeSample> {
    samples
        .into_iter()
        .filter(|s| {
            let keep = filter.allows(&s.name);
            if !keep {
                debug!("Excluding datastore {}", s.name);
            }
            keep
        })
        .collect()
}
