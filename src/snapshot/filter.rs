use anyhow::{Context, Result};
use glob::Pattern;

fn compile(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid datastore pattern '{p}'")))
        .collect()
}

/// Include/exclude selection of datastores by name, using shell wildcards
/// (`*`, `?`, `[...]`, `[!...]`). Excludes win.
#[derive(Debug, Default)]
pub(crate) struct NameFilter {
    include: Vec<Pattern>,
    exclude: Vec<Pattern>,
}

impl NameFilter {
    pub(crate) fn new(include: &[String], exclude: &[String]) -> Result<Self> {
        Ok(Self { include: compile(include)?, exclude: compile(exclude)? })
    }

    /// An empty include list selects every name that is not excluded.
    pub(crate) fn allows(&self, name: &str) -> bool {
        if self.exclude.iter().any(|p| p.matches(name)) {
            return false;
        }
        self.include.is_empty() || self.include.iter().any(|p| p.matches(name))
    }
}
