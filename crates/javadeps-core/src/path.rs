//! Normalized source file identity.
//!
//! Every file the discovery engine touches is identified by a [`SourcePath`]:
//! a forward-slash separated, cleaned path string. Normalizing once at the
//! boundary means the processed and discovered sets never hold two spellings
//! of the same file (`a\b.java` vs `a/b.java`, `./a.java` vs `a.java`).

use std::borrow::Borrow;
use std::fmt;
use std::path::Path;

use path_clean::PathClean;
use serde::Serialize;

/// Normalized, slash-separated path of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SourcePath(String);

impl SourcePath {
    /// Normalize a raw path string.
    ///
    /// Backslashes become forward slashes regardless of host convention, and
    /// `.` / `..` components are resolved lexically.
    pub fn new(raw: impl AsRef<str>) -> Self {
        let slashed = raw.as_ref().replace('\\', "/");
        let cleaned = Path::new(&slashed).to_path_buf().clean();
        Self(cleaned.to_string_lossy().replace('\\', "/"))
    }

    pub fn from_path(path: &Path) -> Self {
        Self::new(path.to_string_lossy())
    }

    /// Express `path` relative to `cwd` when it lives underneath it.
    ///
    /// Paths outside `cwd` keep their absolute spelling.
    pub fn relative_to(path: &Path, cwd: &Path) -> Self {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            cwd.join(path)
        }
        .clean();
        let cwd = cwd.to_path_buf().clean();

        match absolute.strip_prefix(&cwd) {
            Ok(rel) if rel.as_os_str().is_empty() => Self::new("."),
            Ok(rel) => Self::from_path(rel),
            Err(_) => Self::from_path(&absolute),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Append a relative, slash-separated suffix and re-normalize.
    pub fn join(&self, suffix: &str) -> Self {
        if self.0 == "." {
            Self::new(suffix)
        } else {
            Self::new(format!("{}/{}", self.0, suffix))
        }
    }

    /// Directory part of the path, if any.
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(dir, _)| dir)
    }

    /// File name without its extension.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.0.rsplit('/').next()?;
        match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => Some(stem),
            _ => Some(name),
        }
    }

    pub fn has_extension(&self, extension: &str) -> bool {
        self.0
            .rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .is_some_and(|(_, ext)| ext == extension)
    }
}

impl fmt::Display for SourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for SourcePath {
    fn as_ref(&self) -> &Path {
        self.as_path()
    }
}

impl Borrow<str> for SourcePath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SourcePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for SourcePath {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
