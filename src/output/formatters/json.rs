//! JSON output formatter

use crate::linter::LintMessage;
use crate::output::OutputFormatter;

/// Renders the full message list as a JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_messages(&self, messages: &[LintMessage]) -> String {
        serde_json::to_string_pretty(messages).unwrap_or_else(|_| "[]".to_string())
    }
}
