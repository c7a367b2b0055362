use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::VenvError;

/// A virtual environment discovered under the base directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentEntry {
    name: OsString,
}

impl EnvironmentEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    /// Directory basename exactly as the filesystem returned it
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// Outcome of reading one line of selection input against a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Valid(EnvironmentEntry),
    Invalid(String),
    Cancelled,
}

/// Ordered listing captured once per command.
///
/// Ordinals are only meaningful against the snapshot that produced them.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    entries: Vec<EnvironmentEntry>,
}

impl Snapshot {
    pub fn new(entries: Vec<EnvironmentEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[EnvironmentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 1-based position
    pub fn get(&self, ordinal: usize) -> Option<&EnvironmentEntry> {
        ordinal.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }

    pub fn find(&self, name: &OsStr) -> Option<&EnvironmentEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Interpret a line typed at the selection prompt.
    ///
    /// An empty line, `q` or `quit` cancels; otherwise the input must be a
    /// 1-based index within the snapshot.
    pub fn select(&self, input: &str) -> Selection {
        let input = input.trim();
        if input.is_empty()
            || input.eq_ignore_ascii_case("q")
            || input.eq_ignore_ascii_case("quit")
        {
            return Selection::Cancelled;
        }

        match input.parse::<usize>().ok().and_then(|n| self.get(n)) {
            Some(entry) => Selection::Valid(entry.clone()),
            None => Selection::Invalid(input.to_string()),
        }
    }
}

/// Directory of virtual environments
#[derive(Debug, Clone)]
pub struct Registry {
    base: PathBuf,
}

impl Registry {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Enumerate immediate subdirectories in the order the filesystem returns them.
    ///
    /// Symlinks that resolve to directories are included; files are skipped.
    pub fn list(&self) -> Result<Snapshot, VenvError> {
        if !self.base.is_dir() {
            return Err(VenvError::BaseNotFound(self.base.clone()));
        }

        let read_dir = fs::read_dir(&self.base).map_err(|err| VenvError::io(&self.base, err))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|err| VenvError::io(&self.base, err))?;
            if !entry.path().is_dir() {
                continue;
            }
            let entry = EnvironmentEntry::new(entry.file_name());
            tracing::debug!("found environment '{}'", entry.display_name());
            entries.push(entry);
        }

        tracing::debug!("{} environment(s) in {:?}", entries.len(), self.base);
        Ok(Snapshot::new(entries))
    }
}

/// Path of environment `name` directly under `base`.
///
/// `name` must be a single plain path component naming an existing
/// directory; anything else (absolute paths, `..`, nested paths) is
/// reported as not found.
pub fn env_dir(base: &Path, name: &OsStr) -> Result<PathBuf, VenvError> {
    let mut components = Path::new(name).components();
    let is_basename = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    let path = base.join(name);
    if is_basename && path.is_dir() {
        Ok(path)
    } else {
        Err(VenvError::EnvironmentNotFound {
            base: base.to_path_buf(),
            name: name.to_string_lossy().into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn snapshot(names: &[&str]) -> Snapshot {
        Snapshot::new(names.iter().map(|n| EnvironmentEntry::new(*n)).collect())
    }

    fn names(snapshot: &Snapshot) -> Vec<String> {
        snapshot
            .entries()
            .iter()
            .map(|e| e.display_name().into_owned())
            .collect()
    }

    #[test]
    fn test_list_returns_only_directories() {
        let temp = TempDir::new().unwrap();
        for name in ["a", "b", "c"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        fs::write(temp.path().join("notes.txt"), "not an env").unwrap();

        let listed = Registry::new(temp.path()).list().unwrap();
        let names: BTreeSet<_> = names(&listed).into_iter().collect();
        assert_eq!(
            names,
            BTreeSet::from(["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }

    #[test]
    fn test_list_missing_base_is_not_found() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = Registry::new(&missing).list().unwrap_err();
        assert!(matches!(err, VenvError::BaseNotFound(path) if path == missing));
    }

    #[test]
    fn test_list_base_is_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("venvs");
        fs::write(&file, "").unwrap();

        assert!(matches!(
            Registry::new(&file).list(),
            Err(VenvError::BaseNotFound(_))
        ));
    }

    #[test]
    fn test_list_empty_base_is_empty_snapshot() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("readme"), "").unwrap();

        let listed = Registry::new(temp.path()).list().unwrap();
        assert!(listed.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_list_follows_directory_symlinks() {
        let temp = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        std::os::unix::fs::symlink(target.path(), temp.path().join("linked")).unwrap();
        fs::write(temp.path().join("file"), "").unwrap();
        std::os::unix::fs::symlink(temp.path().join("file"), temp.path().join("file-link"))
            .unwrap();

        let listed = Registry::new(temp.path()).list().unwrap();
        assert_eq!(names(&listed), vec!["linked"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_list_keeps_non_utf8_names_intact() {
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let raw = OsStr::from_bytes(b"py\xff312");
        fs::create_dir(temp.path().join(raw)).unwrap();

        let listed = Registry::new(temp.path()).list().unwrap();
        let entry = &listed.entries()[0];
        assert_eq!(entry.name(), raw);
        assert_eq!(entry.display_name(), "py\u{fffd}312");
        assert_eq!(env_dir(temp.path(), entry.name()).unwrap(), temp.path().join(raw));
    }

    #[test]
    fn test_env_dir_existing() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("py312")).unwrap();

        assert_eq!(
            env_dir(temp.path(), OsStr::new("py312")).unwrap(),
            temp.path().join("py312")
        );
    }

    #[rstest]
    #[case("missing")]
    #[case("file")]
    #[case("")]
    #[case(".")]
    #[case("..")]
    #[case("inner/py312")]
    #[case("/")]
    fn test_env_dir_rejects(#[case] name: &str) {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("inner/py312")).unwrap();
        fs::write(temp.path().join("file"), "").unwrap();

        assert!(matches!(
            env_dir(temp.path(), OsStr::new(name)),
            Err(VenvError::EnvironmentNotFound { .. })
        ));
    }

    #[test]
    fn test_env_dir_rejects_absolute_path_outside_base() {
        let base = TempDir::new().unwrap();
        let outside = TempDir::new().unwrap();

        assert!(env_dir(base.path(), outside.path().as_os_str()).is_err());
    }

    #[rstest]
    #[case("1", Selection::Valid(EnvironmentEntry::new("alpha")))]
    #[case(" 3\n", Selection::Valid(EnvironmentEntry::new("gamma")))]
    #[case("0", Selection::Invalid("0".to_string()))]
    #[case("4", Selection::Invalid("4".to_string()))]
    #[case("-1", Selection::Invalid("-1".to_string()))]
    #[case("two", Selection::Invalid("two".to_string()))]
    #[case("", Selection::Cancelled)]
    #[case("q", Selection::Cancelled)]
    #[case("QUIT\n", Selection::Cancelled)]
    fn test_select(#[case] input: &str, #[case] expected: Selection) {
        let snapshot = snapshot(&["alpha", "beta", "gamma"]);
        assert_eq!(snapshot.select(input), expected);
    }

    #[test]
    fn test_select_on_empty_snapshot_is_invalid() {
        assert_eq!(
            Snapshot::default().select("1"),
            Selection::Invalid("1".to_string())
        );
    }

    #[test]
    fn test_find_and_get() {
        let snapshot = snapshot(&["alpha", "beta"]);
        assert_eq!(
            snapshot.find(OsStr::new("beta")).map(|e| e.name()),
            Some(OsStr::new("beta"))
        );
        assert!(snapshot.find(OsStr::new("gamma")).is_none());
        assert_eq!(
            snapshot.get(1).map(|e| e.display_name().into_owned()),
            Some("alpha".to_string())
        );
        assert!(snapshot.get(0).is_none());
        assert_eq!(snapshot.len(), 2);
    }
}
