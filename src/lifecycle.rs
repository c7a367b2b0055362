use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::VenvError;
use crate::registry;

/// Result of a confirmed or declined removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Cancelled,
}

/// Only `yes` confirms a removal
pub fn is_affirmative(token: &str) -> bool {
    token.trim().eq_ignore_ascii_case("yes")
}

/// Delete `base/name` recursively once `confirmation` is affirmative.
///
/// `name` must be a single directory directly under `base`.
/// Deletion is not transactional: an I/O error part way through leaves
/// whatever had not yet been removed in place.
pub fn remove(
    base: &Path,
    name: impl AsRef<OsStr>,
    confirmation: &str,
) -> Result<RemoveOutcome, VenvError> {
    let name = name.as_ref();
    let path = registry::env_dir(base, name)?;

    if !is_affirmative(confirmation) {
        tracing::debug!("removal of {:?} declined", name);
        return Ok(RemoveOutcome::Cancelled);
    }

    fs::remove_dir_all(&path).map_err(|err| VenvError::io(&path, err))?;
    tracing::debug!("removed {:?}", path);

    Ok(RemoveOutcome::Removed)
}
