//! File access seam for the discovery engine.
//!
//! The engine never touches `std::fs` directly; it goes through a
//! [`SourceReader`], so tests can run against an in-memory tree.

use std::io;
use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use crate::path::SourcePath;

/// Read access to source files.
pub trait SourceReader {
    /// Read the whole file. The handle is released before returning.
    fn read_to_string(&self, path: &SourcePath) -> io::Result<String>;

    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &SourcePath) -> bool;
}

/// Reads from the local file system.
///
/// Relative paths resolve against `base` when one is set, otherwise against
/// the process working directory.
#[derive(Debug, Clone, Default)]
pub struct DiskReader {
    base: Option<PathBuf>,
}

impl DiskReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rooted(base: impl Into<PathBuf>) -> Self {
        Self {
            base: Some(base.into()),
        }
    }

    fn locate(&self, path: &SourcePath) -> PathBuf {
        match &self.base {
            Some(base) if !path.as_path().is_absolute() => base.join(path.as_path()),
            _ => path.as_path().to_path_buf(),
        }
    }
}

impl SourceReader for DiskReader {
    fn read_to_string(&self, path: &SourcePath) -> io::Result<String> {
        std::fs::read_to_string(self.locate(path))
    }

    fn is_file(&self, path: &SourcePath) -> bool {
        Path::is_file(&self.locate(path))
    }
}

/// In-memory source tree.
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    files: FxHashMap<SourcePath, String>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<SourcePath>, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn insert(&mut self, path: impl Into<SourcePath>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn paths(&self) -> impl Iterator<Item = &SourcePath> {
        self.files.keys()
    }
}

impl SourceReader for MemoryReader {
    fn read_to_string(&self, path: &SourcePath) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{path} does not exist"))
        })
    }

    fn is_file(&self, path: &SourcePath) -> bool {
        self.files.contains_key(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reader_missing_file_is_not_found() {
        let reader = MemoryReader::new().with_file("src/A.java", "class A {}");
        assert!(reader.is_file(&SourcePath::new("src/A.java")));
        assert!(reader.is_file(&SourcePath::new("./src/A.java")));

        let err = reader
            .read_to_string(&SourcePath::new("src/B.java"))
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_reader_rooted() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("src")).unwrap();
        std::fs::write(temp.path().join("src/A.java"), "class A {}").unwrap();

        let reader = DiskReader::rooted(temp.path());
        let path = SourcePath::new("src/A.java");
        assert!(reader.is_file(&path));
        assert_eq!(reader.read_to_string(&path).unwrap(), "class A {}");
        assert!(!reader.is_file(&SourcePath::new("src")));
    }
}
