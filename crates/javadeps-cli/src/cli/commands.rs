use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::CollisionArg;
use crate::cli::validation::{parse_max_depth, parse_package, parse_segments};

/// Available javadeps subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Discover the dependencies of a source file
    ///
    /// Prints every project file reachable from ENTRY, a `git add` command
    /// for all of them and one for the subset with uncommitted changes.
    Find(FindArgs),

    /// Build the name index and report name collisions
    ///
    /// Useful to see which simple type names are ambiguous before trusting
    /// a `find` result.
    Index(IndexArgs),
}

/// Arguments for the find command
#[derive(Args, Debug, Clone, Default)]
pub struct FindArgs {
    /// Source file to start from
    ///
    /// Examples:
    ///   javadeps find src/main/java/com/acme/web/UserController.java
    #[arg(value_name = "ENTRY")]
    pub entry: PathBuf,

    /// Root of the Java source tree
    #[arg(long, value_name = "DIR")]
    pub src_root: Option<PathBuf>,

    /// Package prefix of project code (detected from ENTRY when omitted)
    #[arg(long, value_name = "PACKAGE", value_parser = parse_package)]
    pub base_package: Option<String>,

    /// Leading package segments kept when detecting the base package
    #[arg(long, value_name = "N", value_parser = parse_segments)]
    pub package_segments: Option<usize>,

    /// Maximum traversal depth
    #[arg(long, value_name = "N", value_parser = parse_max_depth)]
    pub max_depth: Option<usize>,

    /// Name collision handling
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub collision: Option<CollisionArg>,

    /// Skip the git changed-files report
    #[arg(long)]
    pub no_changed: bool,

    /// Compare against this revision instead of the working tree index
    #[arg(long, value_name = "REV", conflicts_with = "no_changed")]
    pub diff_base: Option<String>,

    /// Treat these paths as the changed set instead of asking git
    #[arg(long, value_name = "PATH", num_args = 1.., conflicts_with_all = ["no_changed", "diff_base"])]
    pub changed: Vec<PathBuf>,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Config file (defaults to ./javadeps.config.json when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Arguments for the index command
#[derive(Args, Debug, Clone, Default)]
pub struct IndexArgs {
    /// Root of the Java source tree
    #[arg(long, value_name = "DIR")]
    pub src_root: Option<PathBuf>,

    /// Name collision handling
    #[arg(long, value_enum, value_name = "STRATEGY")]
    pub collision: Option<CollisionArg>,

    /// Print every indexed name with its file(s)
    #[arg(long)]
    pub list: bool,

    /// Config file (defaults to ./javadeps.config.json when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
