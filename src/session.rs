use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::platform::Platform;
use crate::registry::Registry;
use crate::util::paths;

/// Settings resolved once per invocation and passed to every command
#[derive(Debug, Clone)]
pub struct Session {
    platform: Platform,
    config_path: PathBuf,
    config: Config,
}

impl Session {
    /// Resolve the current user's config for the host platform
    pub fn load() -> Result<Self> {
        let home = paths::home_dir()?;
        Ok(Self::for_home(&home, Platform::current()))
    }

    pub fn for_home(home: &Path, platform: Platform) -> Self {
        let config_path = paths::config_file(platform, home);
        let config = Config::load(&config_path, Config::new(paths::default_venv_base(home)));
        tracing::debug!(
            "platform {}, config {:?}, venv base {:?}",
            platform.as_str(),
            config_path,
            config.venv_base
        );

        Self {
            platform,
            config_path,
            config,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn venv_base(&self) -> &Path {
        &self.config.venv_base
    }

    pub fn registry(&self) -> Registry {
        Registry::new(&self.config.venv_base)
    }
}
