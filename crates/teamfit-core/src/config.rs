//! teamfit configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level teamfit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamfitConfig {
    /// Question bank file to use instead of the built-in one.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,
    /// Output directory for saved results.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Whether to point at the runner-up team in results.
    #[serde(default = "default_true")]
    pub show_runner_up: bool,
    /// Width of score bars in the terminal, in characters.
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./teamfit-results")
}
fn default_true() -> bool {
    true
}
fn default_bar_width() -> usize {
    20
}

impl Default for TeamfitConfig {
    fn default() -> Self {
        Self {
            question_bank: None,
            output_dir: default_output_dir(),
            show_runner_up: true,
            bar_width: default_bar_width(),
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `teamfit.toml` in the current directory
/// 2. `~/.config/teamfit/config.toml`
///
/// Environment variable override: `TEAMFIT_QUESTION_BANK`.
pub fn load_config() -> Result<TeamfitConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<TeamfitConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("teamfit.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<TeamfitConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => TeamfitConfig::default(),
    };

    if let Ok(bank) = std::env::var("TEAMFIT_QUESTION_BANK") {
        if !bank.trim().is_empty() {
            config.question_bank = Some(PathBuf::from(bank));
        }
    }

    anyhow::ensure!(config.bar_width >= 1, "bar_width must be at least 1");

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("teamfit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = TeamfitConfig::default();
        assert!(config.question_bank.is_none());
        assert!(config.show_runner_up);
        assert_eq!(config.bar_width, 20);
        assert_eq!(config.output_dir, PathBuf::from("./teamfit-results"));
    }

    #[test]
    fn parse_config() {
        let toml_str = r#"
question_bank = "banks/custom.toml"
output_dir = "out"
show_runner_up = false
"#;
        let config: TeamfitConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.question_bank, Some(PathBuf::from("banks/custom.toml")));
        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(!config.show_runner_up);
        assert_eq!(config.bar_width, 20);
    }

    #[test]
    fn explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config_from(Some(&missing)).is_err());
    }

    #[test]
    fn zero_bar_width_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("teamfit.toml");
        std::fs::write(&path, "bar_width = 0\n").unwrap();
        let err = load_config_from(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("bar_width"));
    }
}
