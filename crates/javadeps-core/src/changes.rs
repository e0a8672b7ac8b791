//! Changed-file sources and the change filter.
//!
//! The closure itself never depends on version control. Callers obtain a
//! changed set from any [`ChangedFileProvider`] and intersect it with the
//! discovered set through [`filter_changed`].

use std::collections::BTreeSet;
use std::path::PathBuf;
use std::process::Command;

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::config::SOURCE_EXTENSION;
use crate::error::ChangeError;
use crate::path::SourcePath;

/// Supplies the set of files considered changed.
pub trait ChangedFileProvider {
    fn changed_files(&self) -> Result<FxHashSet<SourcePath>, ChangeError>;
}

/// Changed files reported by `git diff --name-only`.
#[derive(Debug, Clone)]
pub struct GitDiff {
    workdir: Option<PathBuf>,
    base: Option<String>,
    extension: String,
}

impl Default for GitDiff {
    fn default() -> Self {
        Self {
            workdir: None,
            base: None,
            extension: SOURCE_EXTENSION.to_string(),
        }
    }
}

impl GitDiff {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git in `dir` instead of the process working directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    /// Diff against a revision instead of the index.
    pub fn against(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Arguments passed to git. `core.quotepath=off` keeps non-ASCII paths
    /// verbatim instead of octal-escaped and quoted.
    fn args(&self) -> Vec<&str> {
        let mut args = vec!["-c", "core.quotepath=off", "diff", "--name-only"];
        if let Some(base) = &self.base {
            args.push(base);
        }
        args
    }

    fn command_line(&self) -> String {
        format!("git {}", self.args().join(" "))
    }
}

impl ChangedFileProvider for GitDiff {
    fn changed_files(&self) -> Result<FxHashSet<SourcePath>, ChangeError> {
        let mut cmd = Command::new("git");
        cmd.args(self.args());
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|source| ChangeError::Spawn {
            command: self.command_line(),
            source,
        })?;
        if !output.status.success() {
            return Err(ChangeError::Failed {
                command: self.command_line(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let changed = parse_name_only(&String::from_utf8_lossy(&output.stdout), &self.extension);
        debug!(changed = changed.len(), "collected changed files");
        Ok(changed)
    }
}

/// Parse newline-delimited `--name-only` output, keeping source files only.
pub fn parse_name_only(output: &str, extension: &str) -> FxHashSet<SourcePath> {
    let suffix = format!(".{extension}");
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && line.ends_with(&suffix))
        .map(SourcePath::new)
        .collect()
}

/// Fixed changed-file set.
#[derive(Debug, Clone, Default)]
pub struct StaticChanges(FxHashSet<SourcePath>);

impl StaticChanges {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: Into<SourcePath>> FromIterator<P> for StaticChanges {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl ChangedFileProvider for StaticChanges {
    fn changed_files(&self) -> Result<FxHashSet<SourcePath>, ChangeError> {
        Ok(self.0.clone())
    }
}

/// Discovered files that are also changed, sorted.
pub fn filter_changed<'a, I>(discovered: I, changed: &FxHashSet<SourcePath>) -> BTreeSet<SourcePath>
where
    I: IntoIterator<Item = &'a SourcePath>,
{
    discovered
        .into_iter()
        .filter(|path| changed.contains(*path))
        .cloned()
        .collect()
}
