//! Tool configuration stored in `snippets.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "snippets.toml";

/// Snippets configuration (TOML).
///
/// Every field is optional. An empty or missing file reproduces the classic
/// interactive behavior: unlimited retries and a clock-seeded generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SnippetsConfig {
    pub input: InputConfig,
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InputConfig {
    /// Re-prompts allowed per read before the run fails (batch use).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_retries: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed seed for reproducible runs of the random programs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl SnippetsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.input.max_retries == Some(0) {
            return Err(anyhow!("input.max_retries must be > 0"));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of file values.
    pub fn apply_overrides(mut self, seed: Option<u64>, max_retries: Option<u32>) -> Result<Self> {
        if let Some(seed) = seed {
            self.random.seed = Some(seed);
        }
        if let Some(max_retries) = max_retries {
            self.input.max_retries = Some(max_retries);
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SnippetsConfig::default()`.
pub fn load_config(path: &Path) -> Result<SnippetsConfig> {
    if !path.exists() {
        return Ok(SnippetsConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SnippetsConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SnippetsConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let tmp_path = path.with_extension("toml.tmp");
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
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
        assert_eq!(cfg, SnippetsConfig::default());
    }

    #[test]
    fn load_reads_partial_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[random]\nseed = 12\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.random.seed, Some(12));
        assert_eq!(cfg.input.max_retries, None);
    }

    #[test]
    fn load_rejects_zero_retries() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&path, "[input]\nmax_retries = 0\n").expect("write");
        let err = load_config(&path).expect_err("invalid");
        assert!(format!("{err:#}").contains("max_retries must be > 0"));
    }

    #[test]
    fn write_then_load_keeps_values() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("nested").join(DEFAULT_CONFIG_FILE);
        let cfg = SnippetsConfig {
            input: InputConfig {
                max_retries: Some(3),
            },
            random: RandomConfig { seed: Some(2024) },
        };
        write_config(&path, &cfg).expect("write");
        assert_eq!(load_config(&path).expect("load"), cfg);
    }

    #[test]
    fn overrides_win_over_file_values() {
        let cfg = SnippetsConfig {
            input: InputConfig {
                max_retries: Some(3),
            },
            random: RandomConfig { seed: Some(1) },
        };
        let merged = cfg.apply_overrides(Some(5), None).expect("merge");
        assert_eq!(merged.random.seed, Some(5));
        assert_eq!(merged.input.max_retries, Some(3));
        assert!(
            SnippetsConfig::default()
                .apply_overrides(None, Some(0))
                .is_err()
        );
    }
}
