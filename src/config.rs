use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted venvman settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one subdirectory per virtual environment
    pub venv_base: PathBuf,
}

impl Config {
    pub fn new(venv_base: impl Into<PathBuf>) -> Self {
        Self {
            venv_base: venv_base.into(),
        }
    }

    /// Load the config at `path`, falling back to `default` when it is
    /// missing, unreadable or malformed.
    pub fn load(path: &Path, default: Config) -> Self {
        if !path.exists() {
            tracing::debug!("no config at {:?}, using {:?}", path, default.venv_base);
            return default;
        }

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                tracing::warn!("Failed to read config file {:?}: {}", path, err);
                return default;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to parse config file {:?}: {}", path, err);
                default
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).context("Failed to serialize venvman config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {:?}", path))?;
        Ok(())
    }
}
