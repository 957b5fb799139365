//!
//! This module defines the Linter trait and the normalized lint message model.
//! Adapters implement `Linter` to drive one external checker and append their
//! findings to a caller-owned message collection.

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::exec::ExecError;

#[derive(Debug, Error)]
pub enum LintError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

pub type LintResult = Result<(), LintError>;

/// Message severity, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Advice,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Advice => write!(f, "advice"),
        }
    }
}

/// A single normalized finding, attributed to the path that was linted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LintMessage {
    pub path: PathBuf,
    pub line: usize,
    pub code: &'static str,
    pub description: String,
    pub severity: Severity,
}

/// One external checker.
///
/// The engine owns the message vector; `lint_path` only appends to it. A
/// returned error aborts the lint pass for that path.
pub trait Linter {
    /// Fixed identifier reported as the code on every message.
    fn name(&self) -> &'static str;

    /// Extra command-line options for the tool. `None` appends nothing.
    fn options(&self) -> Option<&str> {
        None
    }

    /// Called once with the full path set before any per-path linting.
    /// Adapters that need batch setup override this.
    fn will_lint_paths(&self, _paths: &[PathBuf]) {}

    /// Per-code severity overrides. Empty means every message keeps the
    /// severity the adapter assigned.
    fn severity_map(&self) -> HashMap<String, Severity> {
        HashMap::new()
    }

    /// Per-code human-readable names. Empty means the message text stands
    /// on its own.
    fn name_map(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Lint one file. `content` is the file's raw bytes; the adapter decides
    /// how to hand them to the tool.
    fn lint_path(&self, path: &Path, content: &[u8], messages: &mut Vec<LintMessage>)
    -> LintResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullLinter;

    impl Linter for NullLinter {
        fn name(&self) -> &'static str {
            "null"
        }

        fn lint_path(
            &self,
            _path: &Path,
            _content: &[u8],
            _messages: &mut Vec<LintMessage>,
        ) -> LintResult {
            Ok(())
        }
    }

    #[test]
    fn test_default_options_is_none() {
        assert_eq!(NullLinter.options(), None);
    }

    #[test]
    fn test_default_maps_are_empty() {
        assert!(NullLinter.severity_map().is_empty());
        assert!(NullLinter.name_map().is_empty());
    }

    #[test]
    fn test_will_lint_paths_is_a_noop() {
        NullLinter.will_lint_paths(&[PathBuf::from("a.py"), PathBuf::from("b.py")]);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Severity::Advice.to_string(), "advice");
    }

    #[test]
    fn test_message_serializes_with_lowercase_severity() {
        let message = LintMessage {
            path: PathBuf::from("foo.py"),
            line: 10,
            code: "pyflakes",
            description: "undefined name 'x'".to_string(),
            severity: Severity::Warning,
        };
        let json = serde_json::to_string(&message).unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"line\":10"));
    }
}
