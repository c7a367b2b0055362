use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the registry, resolver and lifecycle operations.
#[derive(Debug, Error)]
pub enum VenvError {
    #[error("virtual environment directory does not exist: {}", .0.display())]
    BaseNotFound(PathBuf),

    #[error("environment '{name}' does not exist in {}", .base.display())]
    EnvironmentNotFound { base: PathBuf, name: String },

    #[error("activation script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("invalid selection '{0}'")]
    InvalidSelection(String),

    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VenvError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
