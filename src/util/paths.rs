use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::platform::Platform;

const TOOL_NAME: &str = "venvman";

/// Get the home directory
pub fn home_dir() -> Result<PathBuf> {
    directories::BaseDirs::new()
        .context("Failed to get home directory")
        .map(|bd| bd.home_dir().to_path_buf())
}

/// Get the per-user config file
///
/// Returns `<home>/AppData/Local/venvman/config.cfg` on Windows and
/// `<home>/.venvman.cfg` everywhere else
pub fn config_file(platform: Platform, home: &Path) -> PathBuf {
    match platform {
        Platform::Windows => home
            .join("AppData")
            .join("Local")
            .join(TOOL_NAME)
            .join("config.cfg"),
        Platform::Unix => home.join(format!(".{TOOL_NAME}.cfg")),
    }
}

/// Base directory used when no config file is present
pub fn default_venv_base(home: &Path) -> PathBuf {
    home.join("venvs")
}

/// Expand `~` and `$VAR` in a user-supplied path and anchor it at `cwd`
pub fn expand(input: &str, cwd: &Path) -> Result<PathBuf> {
    let expanded = shellexpand::full(input)
        .with_context(|| format!("Failed to expand path '{input}'"))?;
    let path = PathBuf::from(expanded.as_ref());

    if path.is_absolute() {
        Ok(path)
    } else {
        Ok(cwd.join(path))
    }
}
