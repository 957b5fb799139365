//!
//! PyFlakes adapter. Pipes Python source to the `pyflakes` checker and
//! converts its line-oriented report into lint messages.

use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::config::ToolConfig;
use crate::exec::{check_status, compose_python_path, run_with_stdin};
use crate::linter::{LintMessage, LintResult, Linter, Severity};

/// One diagnostic per report line: `<path>:<line>: <message>`.
static DIAGNOSTIC_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?):(\d+): (.*)$").unwrap());

/// Drives `pyflakes` over one file at a time.
///
/// PyFlakes reports everything at a single severity; the message text carries
/// the specificity, so the severity and name maps stay empty.
pub struct PyflakesLinter {
    config: ToolConfig,
}

impl PyflakesLinter {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }
}

impl Linter for PyflakesLinter {
    fn name(&self) -> &'static str {
        "pyflakes"
    }

    fn options(&self) -> Option<&str> {
        self.config.options.as_deref()
    }

    fn lint_path(
        &self,
        path: &Path,
        content: &[u8],
        messages: &mut Vec<LintMessage>,
    ) -> LintResult {
        let tool = self.config.resolve(self.name());

        let mut cmd = Command::new(&tool.bin);
        if let Some(options) = self.options() {
            cmd.args(options.split_whitespace());
        }

        let inherited = std::env::var("PYTHONPATH").ok();
        if let Some(python_path) =
            compose_python_path(tool.site_packages.as_deref(), inherited.as_deref())
        {
            cmd.env("PYTHONPATH", python_path);
        }

        let output = check_status(&tool.bin, run_with_stdin(&mut cmd, content)?)?;
        parse_report(self.name(), path, &output.stdout, messages);
        Ok(())
    }
}

/// Convert a captured report into messages, in report order. Lines that do
/// not look like diagnostics (banners, summaries, blanks) are skipped.
fn parse_report(code: &'static str, path: &Path, stdout: &str, messages: &mut Vec<LintMessage>) {
    let mut skipped = 0usize;

    for line in stdout.split('\n') {
        let Some(caps) = DIAGNOSTIC_LINE.captures(line) else {
            if !line.trim().is_empty() {
                skipped += 1;
            }
            continue;
        };

        let Ok(line_number) = caps[2].trim().parse::<usize>() else {
            skipped += 1;
            continue;
        };

        // The reported path (capture 1) is ignored: messages are attributed
        // to the path whose content was piped in, and line numbers refer to
        // that piped content.
        messages.push(LintMessage {
            path: path.to_path_buf(),
            line: line_number,
            code,
            description: caps[3].trim().to_string(),
            severity: Severity::Warning,
        });
    }

    if skipped > 0 {
        debug!("{code}: skipped {skipped} non-diagnostic output line(s)");
    }
}
