//! CLI configuration stored in `standard.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::matching::MatchOptions;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "standard.toml";

/// CLI configuration (TOML).
///
/// Missing fields take their defaults, so an empty file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StandardConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Plain-string matching behaviour for `one-of` and `all-of`.
    pub matching: MatchOptions,
}

impl Default for StandardConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            matching: MatchOptions::default(),
        }
    }
}

impl StandardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must be a non-empty filter directive"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `StandardConfig::default()`.
pub fn load_config(path: &Path) -> Result<StandardConfig> {
    if !path.exists() {
        let cfg = StandardConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: StandardConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &StandardConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, StandardConfig::default());
        assert!(!cfg.matching.fold_case);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join("standard.toml");
        let cfg = StandardConfig {
            log_filter: "standard=debug".to_string(),
            matching: MatchOptions::case_insensitive(),
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("standard.toml");
        fs::write(&path, "[matching]\nfold_case = true\n").expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.log_filter, "warn");
        assert!(loaded.matching.fold_case);
    }

    #[test]
    fn empty_log_filter_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("standard.toml");
        fs::write(&path, "log_filter = \" \"\n").expect("write");
        assert!(load_config(&path).is_err());
    }
}
