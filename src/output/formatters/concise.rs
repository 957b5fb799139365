//! Concise output formatter: file:line: severity: [code] message

use crate::linter::LintMessage;
use crate::output::OutputFormatter;

/// Plain machine-friendly formatter, one message per line
pub struct ConciseFormatter;

impl ConciseFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConciseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for ConciseFormatter {
    fn format_messages(&self, messages: &[LintMessage]) -> String {
        let mut output = String::new();

        for message in messages {
            let line = format!(
                "{}:{}: {}: [{}] {}",
                message.path.display(),
                message.line,
                message.severity,
                message.code,
                message.description
            );
            output.push_str(&line);
            output.push('\n');
        }

        if output.ends_with('\n') {
            output.pop();
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::Severity;
    use std::path::PathBuf;

    #[test]
    fn test_concise_line_shape() {
        let formatter = ConciseFormatter::new();
        let output = formatter.format_messages(&[LintMessage {
            path: PathBuf::from("src/app.py"),
            line: 7,
            code: "pyflakes",
            description: "local variable 'y' is assigned to but never used".to_string(),
            severity: Severity::Warning,
        }]);
        assert_eq!(
            output,
            "src/app.py:7: warning: [pyflakes] local variable 'y' is assigned to but never used"
        );
    }

    #[test]
    fn test_concise_empty() {
        assert_eq!(ConciseFormatter::new().format_messages(&[]), "");
    }
}
