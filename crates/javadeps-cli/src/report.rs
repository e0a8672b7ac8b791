//! Dependency report produced by `javadeps find`.

use std::fmt::Write as _;
use std::path::Path;

use javadeps_core::{DiscoveryOutcome, SourcePath, filter_changed};
use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{Result, ResultExt};
use crate::ui::format_listing;

/// Printed in place of the changed listing when nothing matched.
pub const NONE_MARKER: &str = "(none)";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyReport {
    pub entry: SourcePath,
    pub base_package: String,
    pub src_root: SourcePath,
    pub max_depth: usize,
    pub levels: usize,
    pub bound_reached: bool,
    /// Every discovered file, entry included, sorted.
    pub dependencies: Vec<SourcePath>,
    /// Discovered files with uncommitted changes; absent when not queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<Vec<SourcePath>>,
}

impl DependencyReport {
    pub fn new(outcome: &DiscoveryOutcome, src_root: SourcePath, max_depth: usize) -> Self {
        Self {
            entry: outcome.entry.clone(),
            base_package: outcome.base_package.clone(),
            src_root,
            max_depth,
            levels: outcome.closure.levels,
            bound_reached: outcome.closure.bound_reached,
            dependencies: outcome.sorted().into_iter().cloned().collect(),
            changed: None,
        }
    }

    /// Attach the changed subset of the dependencies.
    pub fn with_changed(mut self, changed: &FxHashSet<SourcePath>) -> Self {
        self.changed = Some(
            filter_changed(&self.dependencies, changed)
                .into_iter()
                .collect(),
        );
        self
    }

    /// `git add` for all dependencies.
    pub fn stage_all(&self) -> Option<String> {
        stage_command(&self.dependencies)
    }

    /// `git add` for the changed dependencies.
    pub fn stage_changed(&self) -> Option<String> {
        self.changed.as_deref().and_then(stage_command)
    }

    /// Plain-text report for stdout.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Dependencies ({}):", self.dependencies.len());
        out.push_str(&format_listing(&self.dependencies, ""));

        if let Some(command) = self.stage_all() {
            let _ = writeln!(out, "\nStage all:\n{command}");
        }

        if let Some(changed) = &self.changed {
            out.push_str("\nChanged dependencies:\n");
            if changed.is_empty() {
                let _ = writeln!(out, "  {NONE_MARKER}");
            } else {
                out.push_str(&format_listing(changed, "  "));
                if let Some(command) = self.stage_changed() {
                    let _ = writeln!(out, "\nStage changed:\n{command}");
                }
            }
        }

        out
    }

    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write the JSON form, creating parent directories.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_pretty_json()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_path(parent)?;
            }
        }
        std::fs::write(path, json).with_path(path)?;
        Ok(())
    }
}

/// `git add <paths>`, or `None` for no paths.
pub fn stage_command(paths: &[SourcePath]) -> Option<String> {
    if paths.is_empty() {
        return None;
    }
    let args: Vec<String> = paths.iter().map(|p| shell_quote(p.as_str())).collect();
    Some(format!("git add {}", args.join(" ")))
}

/// Single-quote `arg` when a POSIX shell would split or expand it.
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '/' | '.' | '_' | '-' | '+' | ':' | '@' | ','));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
