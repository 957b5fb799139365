//! rulint drives external style checkers over source files and normalizes
//! their line-oriented reports into a single lint message stream.

pub mod config;
pub mod exec;
pub mod exit_codes;
pub mod linter;
pub mod linters;
pub mod output;

pub use config::{Config, ToolConfig};
pub use linter::{LintError, LintMessage, Linter, Severity};

use std::path::{Path, PathBuf};

/// Lint one file with the given adapters, appending messages in adapter
/// order. A failing adapter aborts the pass for this path.
pub fn lint_path(
    path: &Path,
    content: &[u8],
    linters: &[Box<dyn Linter>],
    messages: &mut Vec<LintMessage>,
) -> Result<(), LintError> {
    for linter in linters {
        linter.lint_path(path, content, messages)?;
    }
    Ok(())
}

/// Lint a set of files. Each adapter's pre-pass hook runs once with the full
/// path set before any per-path work begins.
pub fn lint_paths(
    paths: &[PathBuf],
    linters: &[Box<dyn Linter>],
) -> Result<Vec<LintMessage>, LintError> {
    for linter in linters {
        linter.will_lint_paths(paths);
    }

    let mut messages = Vec::new();
    for path in paths {
        let content = std::fs::read(path).map_err(|source| LintError::Read {
            path: path.clone(),
            source,
        })?;
        lint_path(path, &content, linters, &mut messages)?;
    }
    Ok(messages)
}
