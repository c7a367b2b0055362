use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::error::VenvError;
use crate::platform::Platform;
use crate::registry;

/// Activation script and shell invocation for one environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationTarget {
    pub name: OsString,
    pub script: PathBuf,
    pub command: String,
}

/// Work out how to activate `base/name` on `platform`.
///
/// Nothing is executed; the caller prints `command` for the user's shell.
pub fn resolve(
    base: &Path,
    name: impl AsRef<OsStr>,
    platform: Platform,
) -> Result<ActivationTarget, VenvError> {
    let name = name.as_ref();
    let env_dir = registry::env_dir(base, name)?;

    let script = platform.activation_script(&env_dir);
    if !script.is_file() {
        return Err(VenvError::ScriptNotFound(script));
    }

    let command = platform.activation_command(&script);
    tracing::debug!("resolved {:?} on {} to {:?}", name, platform.as_str(), script);

    Ok(ActivationTarget {
        name: name.to_os_string(),
        script,
        command,
    })
}
