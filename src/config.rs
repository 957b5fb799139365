//!
//! Configuration loading for rulint. Tool settings live under `[lint.<tool>]`
//! tables in a TOML file; each table carries at most an executable path, an
//! install prefix, and an options string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config files probed in the current directory, in order.
pub const DEFAULT_CONFIG_FILES: &[&str] = &[".rulint.toml", "rulint.toml"];

/// Directory segment used when deriving a site-packages contribution from an
/// install prefix.
const PYTHON_SITE_DIR: &str = "python2.6";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Complete configuration: one `ToolConfig` per external checker.
#[derive(Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub lint: BTreeMap<String, ToolConfig>,
}

/// Settings for one external checker.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Direct executable path. Takes precedence over `prefix`.
    pub path: Option<String>,
    /// Install root. Contributes both the executable location and a
    /// site-packages entry for the interpreter search path.
    pub prefix: Option<String>,
    /// Extra command-line options, whitespace-separated.
    pub options: Option<String>,
}

/// Outcome of resolving a `ToolConfig` against a tool name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    pub bin: String,
    pub site_packages: Option<String>,
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Probe the current directory for a config file. Absence is not an
    /// error; the defaults apply.
    pub fn discover() -> Result<Config, ConfigError> {
        for name in DEFAULT_CONFIG_FILES {
            if Path::new(name).exists() {
                return Self::load(name);
            }
        }
        Ok(Config::default())
    }

    /// Settings for one tool, defaulted when the section is absent.
    pub fn tool(&self, name: &str) -> ToolConfig {
        self.lint.get(name).cloned().unwrap_or_default()
    }
}

impl ToolConfig {
    /// Resolve the executable for `tool`.
    ///
    /// An explicit `path` wins over `prefix`. A `prefix` alone derives both
    /// `<prefix>/bin/<tool>` and a site-packages contribution. With neither,
    /// the bare tool name is left to ordinary PATH lookup.
    pub fn resolve(&self, tool: &str) -> ResolvedTool {
        if let Some(path) = &self.path {
            ResolvedTool {
                bin: path.clone(),
                site_packages: None,
            }
        } else if let Some(prefix) = &self.prefix {
            ResolvedTool {
                bin: format!("{prefix}/bin/{tool}"),
                site_packages: Some(format!("{prefix}/lib/{PYTHON_SITE_DIR}/site-packages")),
            }
        } else {
            ResolvedTool {
                bin: tool.to_string(),
                site_packages: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_path_wins_over_prefix() {
        let config = ToolConfig {
            path: Some("/custom/pyflakes".to_string()),
            prefix: Some("/opt/py".to_string()),
            options: None,
        };
        let resolved = config.resolve("pyflakes");
        assert_eq!(resolved.bin, "/custom/pyflakes");
        assert_eq!(resolved.site_packages, None);
    }

    #[test]
    fn test_prefix_derives_bin_and_site_packages() {
        let config = ToolConfig {
            path: None,
            prefix: Some("/opt/py".to_string()),
            options: None,
        };
        let resolved = config.resolve("pyflakes");
        assert_eq!(resolved.bin, "/opt/py/bin/pyflakes");
        assert_eq!(
            resolved.site_packages.as_deref(),
            Some("/opt/py/lib/python2.6/site-packages")
        );
    }

    #[test]
    fn test_unconfigured_falls_back_to_bare_name() {
        let resolved = ToolConfig::default().resolve("pyflakes");
        assert_eq!(resolved.bin, "pyflakes");
        assert_eq!(resolved.site_packages, None);
    }

    #[test]
    fn test_parse_lint_tables() {
        let config: Config = toml::from_str(
            r#"
            [lint.pyflakes]
            prefix = "/opt/py"
            options = "--strict"
            "#,
        )
        .unwrap();
        let tool = config.tool("pyflakes");
        assert_eq!(tool.prefix.as_deref(), Some("/opt/py"));
        assert_eq!(tool.options.as_deref(), Some("--strict"));
        assert_eq!(tool.path, None);
    }

    #[test]
    fn test_missing_section_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.tool("pyflakes"), ToolConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result: Result<Config, _> = toml::from_str(
            r#"
            [lint.pyflakes]
            exe = "/usr/bin/pyflakes"
            "#,
        );
        assert!(result.is_err());
    }
}
