//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};
use std::time::Instant;

use javadeps_core::{Discovery, DiscoveryConfig, NameIndex, SourcePath};

use crate::config::{ConfigOverrides, JavadepsConfig};
use crate::error::Result;
use crate::ui::{self, Spinner, format_duration, pluralize};

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Load, merge and validate configuration.
pub fn load_config(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<JavadepsConfig> {
    let config = JavadepsConfig::load(overrides, config_path)?;
    config.validate()?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}

/// Discovery options with the source root expressed relative to `cwd`.
///
/// Discovered paths are built from the source root, so this keeps them in
/// the same form git prints.
pub fn discovery_for(config: &JavadepsConfig, cwd: &Path) -> (Discovery, SourcePath) {
    let src_root = SourcePath::relative_to(&config.src_root, cwd);
    let discovery = Discovery::new(DiscoveryConfig {
        source_root: src_root.as_path().to_path_buf(),
        ..config.discovery_config()
    });
    (discovery, src_root)
}

/// A user-supplied file path spelled the way indexed files are.
///
/// Indexed paths are built from `src_root`, which is relative to `cwd` when
/// it lies underneath it and absolute otherwise. The file takes the same
/// form so one file never has two identities.
pub fn source_path_for(path: &Path, src_root: &SourcePath, cwd: &Path) -> SourcePath {
    let relative = SourcePath::relative_to(path, cwd);
    if src_root.as_path().is_absolute() && !relative.as_path().is_absolute() {
        SourcePath::from_path(&cwd.join(relative.as_path()))
    } else {
        relative
    }
}

/// Build the name index behind a spinner.
pub fn build_index(discovery: &Discovery, src_root: &SourcePath, quiet: bool) -> Result<NameIndex> {
    let spinner = Spinner::maybe(ui::spinners_enabled(quiet), &format!("Indexing {src_root}..."));
    let started = Instant::now();

    match discovery.build_index() {
        Ok(index) => {
            spinner.finish(&format!(
                "Indexed {} in {}",
                pluralize(index.len(), "type", "types"),
                format_duration(started.elapsed())
            ));
            Ok(index)
        }
        Err(err) => {
            spinner.fail("Indexing failed");
            Err(err.into())
        }
    }
}
