//! Command-line interface definition for javadeps.
//!
//! # Command Structure
//!
//! - `javadeps find <ENTRY>` - Discover the dependencies of one source file
//! - `javadeps index` - Build the name index and report collisions

mod commands;
pub mod enums;
mod validation;

use clap::Parser;

pub use commands::{Command, FindArgs, IndexArgs};
pub use enums::*;
pub use validation::{parse_max_depth, parse_package, parse_segments};

/// javadeps - stage a Java file together with what it depends on
#[derive(Parser, Debug)]
#[command(
    name = "javadeps",
    version,
    about = "Find the project files a Java source file depends on",
    long_about = "javadeps follows imports, extends/implements clauses, injected fields and\n\
                  constructor parameters from one Java file, collects the project files it\n\
                  reaches and prints `git add` commands for them and for the subset git\n\
                  reports as modified."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every expanded file and every name collision.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors and the dependency listing
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
