//! Default text output formatter with colors

use crate::linter::LintMessage;
use crate::output::OutputFormatter;
use colored::*;

/// Default human-readable formatter with colors
pub struct TextFormatter {
    use_colors: bool,
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_colors() -> Self {
        Self { use_colors: false }
    }
}

impl OutputFormatter for TextFormatter {
    fn format_messages(&self, messages: &[LintMessage]) -> String {
        let mut output = String::new();

        for message in messages {
            let path = message.path.display().to_string();

            // Format: file:line: [code] description
            let line = format!(
                "{}:{}: {} {}",
                if self.use_colors {
                    path.blue().underline().to_string()
                } else {
                    path
                },
                if self.use_colors {
                    message.line.to_string().cyan().to_string()
                } else {
                    message.line.to_string()
                },
                if self.use_colors {
                    format!("[{}]", message.code).yellow().to_string()
                } else {
                    format!("[{}]", message.code)
                },
                message.description,
            );

            output.push_str(&line);
            output.push('\n');
        }

        // Remove trailing newline
        if output.ends_with('\n') {
            output.pop();
        }

        output
    }

    fn use_colors(&self) -> bool {
        self.use_colors
    }
}
