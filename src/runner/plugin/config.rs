//! Loader configuration.

use std::fs;
use std::path::Path;

use crate::runner::ds::error::ConfigError;

/// Options the hosting module loader passes with every load request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoaderConfig {
    /// Set during offline build/bundling passes. Loads then succeed with a
    /// `null` placeholder and never touch the root scope.
    pub is_build: bool,
}

impl LoaderConfig {
    pub fn new() -> Self {
        LoaderConfig { is_build: false }
    }

    pub fn build() -> Self {
        LoaderConfig { is_build: true }
    }

    /// Load configuration from a TOML file.
    ///
    /// Expected format:
    /// ```toml
    /// [loader]
    /// is_build = true
    /// ```
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// Only the `[loader]` section is read; keys outside it, and unknown
    /// keys inside it, are ignored.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut config = LoaderConfig::new();
        let mut current_section = String::new();

        for (idx, line) in content.lines().enumerate() {
            let line = strip_comment(line).trim();

            if line.is_empty() {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].trim().to_string();
                continue;
            }

            if current_section != "loader" {
                continue;
            }

            let mut parts = line.splitn(2, '=');
            let key = parts.next().unwrap_or("").trim();
            let value = match parts.next() {
                Some(v) => v.trim(),
                None => {
                    return Err(ConfigError::Parse {
                        line: idx + 1,
                        message: format!("expected `key = value`, found `{}`", line),
                    })
                }
            };

            if key == "is_build" {
                config.is_build = parse_bool(value).ok_or_else(|| ConfigError::Parse {
                    line: idx + 1,
                    message: format!("`is_build` must be true or false, found `{}`", value),
                })?;
            }
        }

        Ok(config)
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = LoaderConfig::parse("").unwrap();
        assert!(!config.is_build);
    }

    #[test]
    fn test_parse_build_flag() {
        let config = LoaderConfig::parse("[loader]\nis_build = true # bundling\n").unwrap();
        assert_eq!(config, LoaderConfig::build());
    }

    #[test]
    fn test_keys_outside_loader_section_are_ignored() {
        let config = LoaderConfig::parse("is_build = true\n[other]\nis_build = true\n").unwrap();
        assert!(!config.is_build);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config = LoaderConfig::parse("[loader]\nbase_url = \"../sources\"\n").unwrap();
        assert!(!config.is_build);
    }

    #[test]
    fn test_bad_boolean_reports_line() {
        match LoaderConfig::parse("[loader]\n\nis_build = yes\n") {
            Err(ConfigError::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_equals_is_an_error() {
        assert!(LoaderConfig::parse("[loader]\nis_build\n").is_err());
    }
}
