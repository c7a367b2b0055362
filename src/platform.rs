use std::path::{Path, PathBuf};

/// Host platform family, selects the environment layout and config location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Unix,
}

impl Platform {
    /// Platform this binary was built for
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Unix
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Unix => "unix",
        }
    }

    /// Activation script path relative to an environment root
    pub fn activation_script(self, env_dir: &Path) -> PathBuf {
        match self {
            Platform::Windows => env_dir.join("Scripts").join("activate.bat"),
            Platform::Unix => env_dir.join("bin").join("activate"),
        }
    }

    /// Shell invocation that activates `script`
    pub fn activation_command(self, script: &Path) -> String {
        match self {
            Platform::Windows => format!("call {}", script.display()),
            Platform::Unix => format!("source {}", script.display()),
        }
    }
}
