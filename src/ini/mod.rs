//! Export of a ConfigRecord into the sectioned `Key: Value` text format
//!
//! Every field is rendered generically first, then the override rules
//! rewrite the handful of fields with special formatting, and finally the
//! lines are assembled following the fixed section layout.

pub mod layout;
pub mod overrides;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::config::ConfigRecord;
use crate::constants::format;
use layout::LAYOUT;
use overrides::{OVERRIDE_RULES, Rendered};

/// Ordered output lines, including section headers and blank separators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedConfig {
    lines: Vec<String>,
}

impl SerializedConfig {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Lines joined with newlines, ready to be written out
    pub fn to_text(&self) -> String {
        self.lines.join(format::LINE_SEPARATOR)
    }
}

impl From<Vec<String>> for SerializedConfig {
    fn from(lines: Vec<String>) -> Self {
        Self::new(lines)
    }
}

impl fmt::Display for SerializedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Render `record` into the exported config file
///
/// Total over any record: missing fields and unexpected value kinds
/// produce empty or natural-string values, never an error.
pub fn serialize_config(record: &ConfigRecord) -> SerializedConfig {
    let mut rendered: Rendered = record
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_config_text()))
        .collect();

    for rule in OVERRIDE_RULES {
        rule.apply(record, &mut rendered);
    }

    let mut lines = Vec::with_capacity(layout::line_count());
    for (index, section) in LAYOUT.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!("[{}]", section.name));
        for (key, field) in section.entries {
            let value = rendered.get(*field).map(String::as_str).unwrap_or_default();
            lines.push(format!("{key}{}{value}", format::KEY_VALUE_SEPARATOR));
        }
    }

    debug!(fields = record.len(), lines = lines.len(), "serialized config");
    SerializedConfig::new(lines)
}
