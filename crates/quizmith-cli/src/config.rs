//! quizmith configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizmith configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizmithConfig {
    /// Directory holding the stored collections.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Percentage at or above which an attempt counts as a pass.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,
    /// Directory reports are written into when no output path is given.
    #[serde(default = "default_report_dir")]
    pub report_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./quizmith-data")
}

fn default_pass_threshold() -> f64 {
    60.0
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("./quizmith-reports")
}

impl Default for QuizmithConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            pass_threshold: default_pass_threshold(),
            report_dir: default_report_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizmith.toml` in the current directory
/// 2. `~/.config/quizmith/config.toml`
///
/// `QUIZMITH_DATA_DIR` overrides the data directory either way.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizmithConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizmith.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizmithConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizmithConfig::default(),
    };

    if let Ok(dir) = std::env::var("QUIZMITH_DATA_DIR") {
        config.data_dir = PathBuf::from(dir);
    }

    anyhow::ensure!(
        (0.0..=100.0).contains(&config.pass_threshold),
        "pass_threshold must be between 0 and 100"
    );

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizmith"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizmithConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("./quizmith-data"));
        assert_eq!(config.pass_threshold, 60.0);
    }

    #[test]
    fn parse_partial_config_applies_defaults() {
        let config: QuizmithConfig = toml::from_str("pass_threshold = 75.0").unwrap();
        assert_eq!(config.pass_threshold, 75.0);
        assert_eq!(config.data_dir, PathBuf::from("./quizmith-data"));
    }

    #[test]
    fn missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("/no/such/quizmith.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
