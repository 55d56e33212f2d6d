use super::settings::CheckConfig;
use std::str::FromStr;
use tracing::debug;

/// Store `value` into `slot` if it parses; reports whether it did.
fn parse_into<T: FromStr>(value: &str, slot: &mut T) -> bool {
    value.parse().map(|v| *slot = v).is_ok()
}

fn parse_list(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect()
}

impl CheckConfig {
    /// Parse the simple KEY="VALUE" config format. Unknown keys and
    /// unparsable values are ignored.
    pub(crate) fn parse_ini(&mut self, contents: &str) {
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!("Ignoring config line without '=': {line}");
                continue;
            };
            let key = key.trim();
            let value = value.trim().trim_matches('"');

            let applied = match key {
                "WARNING" => parse_into(value, &mut self.thresholds.warning_percent),
                "CRITICAL" => parse_into(value, &mut self.thresholds.critical_percent),
                "OVERCOMMITTED" => parse_into(value, &mut self.thresholds.overcommit_percent),
                "MAX_ALERTS" => parse_into(value, &mut self.thresholds.max_alerts),
                "INCLUDE" => {
                    self.include = parse_list(value);
                    true
                }
                "EXCLUDE" => {
                    self.exclude = parse_list(value);
                    true
                }
                "SNAPSHOT" => {
                    self.snapshot = value.to_string();
                    true
                }
                _ => false,
            };

            if !applied {
                debug!("Ignoring config entry {key}=\"{value}\"");
            }
        }
    }
}
