//! Error types for discovery.
//!
//! Only configuration problems are errors. Anything that goes wrong while
//! expanding an individual file (unreadable file, no rule match, unresolved
//! symbol) is logged and lowers recall instead of failing the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::path::SourcePath;

/// Fatal discovery errors. Any of these aborts the run before output.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("Entry file not found: {0}")]
    EntryNotFound(SourcePath),

    #[error("Source root '{}' is unreadable: {source}", .path.display())]
    SourceRootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source root '{}' is not a directory", .0.display())]
    SourceRootNotDirectory(PathBuf),

    #[error("Could not detect the base package of {entry}: {reason}")]
    BasePackageUndetected { entry: SourcePath, reason: String },

    #[error("Type name '{name}' is declared by both {first} and {second}")]
    NameCollision {
        name: String,
        first: SourcePath,
        second: SourcePath,
    },
}

/// Failure to obtain the changed-file set.
#[derive(Debug, Error)]
pub enum ChangeError {
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}
