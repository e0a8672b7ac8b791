//! Miette diagnostic conversion for CLI errors.

use ::miette::Report;
use javadeps_core::DiscoveryError;

use crate::error::CliError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Discovery(e) => discovery_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
        _ => ::miette::miette!("{}", err),
    }
}

/// Convert DiscoveryError to miette Report with a help line per failure.
pub fn discovery_error_to_miette(err: DiscoveryError) -> Report {
    match &err {
        DiscoveryError::EntryNotFound(_) => ::miette::miette!(
            help = "Check the path and run javadeps from the project root",
            "{}",
            err
        ),
        DiscoveryError::SourceRootUnreadable { .. } | DiscoveryError::SourceRootNotDirectory(_) => {
            ::miette::miette!(
                help = "Point --src-root at the directory holding the Java sources",
                "{}",
                err
            )
        }
        DiscoveryError::BasePackageUndetected { .. } => ::miette::miette!(
            help = "Set it explicitly with --base-package (e.g. com.example)",
            "{}",
            err
        ),
        DiscoveryError::NameCollision { .. } => ::miette::miette!(
            help = "Rename one of the types or use --collision last-wins|first-wins|multi",
            "{}",
            err
        ),
    }
}
