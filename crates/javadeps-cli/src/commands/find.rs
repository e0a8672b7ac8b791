//! Find command implementation.
//!
//! Runs discovery for one entry file, intersects the result with the changed
//! files and prints the report to stdout.

use std::path::Path;

use javadeps_core::{ChangedFileProvider, DiskReader, GitDiff, SourcePath, StaticChanges};
use rustc_hash::FxHashSet;
use tracing::warn;

use crate::cli::FindArgs;
use crate::commands::utils;
use crate::config::{ConfigOverrides, JavadepsConfig};
use crate::error::Result;
use crate::report::DependencyReport;
use crate::ui::{self, pluralize};

/// Execute the find command.
///
/// # Steps
///
/// 1. Load and validate configuration
/// 2. Check the entry file exists (before the index is built)
/// 3. Build the name index
/// 4. Run the closure
/// 5. Collect changed files (explicit list, git, or skipped)
/// 6. Print the report, optionally write JSON
///
/// # Errors
///
/// Returns errors for invalid configuration, a missing entry file, an
/// unreadable source root or an undetectable base package. A failing
/// `git diff` only produces a warning.
pub fn execute(args: FindArgs, quiet: bool) -> Result<()> {
    let config = utils::load_config(&ConfigOverrides::from(&args), args.config.as_deref())?;
    let cwd = utils::get_cwd()?;

    let (discovery, src_root) = utils::discovery_for(&config, &cwd);
    let entry = utils::source_path_for(&args.entry, &src_root, &cwd);
    let reader = DiskReader::new();
    discovery.ensure_entry(&entry, &reader)?;

    if !quiet {
        ui::info(&format!("Finding dependencies of {entry}"));
    }

    let index = utils::build_index(&discovery, &src_root, quiet)?;
    let outcome = discovery.run(&entry, &index, &reader)?;

    if !quiet {
        ui::info(&format!(
            "Base package {} · source root {} · max depth {}",
            outcome.base_package, src_root, config.max_depth
        ));
    }

    let changed = changed_files(&args, &config, &src_root, &cwd);
    let mut report = DependencyReport::new(&outcome, src_root, config.max_depth);
    if let Some(changed) = changed {
        report = report.with_changed(&changed);
    }

    print!("{}", report.render_text());

    if !quiet {
        let found = pluralize(report.dependencies.len(), "file", "files");
        if outcome.closure.bound_reached {
            ui::warning(&format!("Found {found} before the depth bound"));
        } else {
            ui::success(&format!("Found {found}"));
        }
    }

    if let Some(path) = &args.json {
        report.write_json(path)?;
        if !quiet {
            ui::success(&format!("Wrote report to {}", path.display()));
        }
    }

    Ok(())
}

/// The changed-file set, or `None` when change reporting is off.
///
/// An explicit `--changed` list wins over git and is spelled like the
/// discovered files. Git failures are logged and
/// yield an empty set.
fn changed_files(
    args: &FindArgs,
    config: &JavadepsConfig,
    src_root: &SourcePath,
    cwd: &Path,
) -> Option<FxHashSet<SourcePath>> {
    if !args.changed.is_empty() {
        let explicit: StaticChanges = args
            .changed
            .iter()
            .map(|path| utils::source_path_for(path, src_root, cwd))
            .collect();
        return explicit.changed_files().ok();
    }

    if !config.changed {
        return None;
    }

    let mut git = GitDiff::new().in_dir(cwd);
    if let Some(base) = &config.diff_base {
        git = git.against(base.clone());
    }

    match git.changed_files() {
        Ok(changed) => Some(changed),
        Err(err) => {
            warn!(error = %err, "could not list changed files");
            Some(FxHashSet::default())
        }
    }
}
