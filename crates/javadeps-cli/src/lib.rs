//! javadeps CLI - find the project files a Java source file depends on.
//!
//! This crate wraps `javadeps-core` in a command-line tool: it loads layered
//! configuration, runs discovery for one entry file, intersects the result
//! with the files git reports as modified, and prints `git add` commands for
//! both sets.
//!
//! # Architecture
//!
//! - [`cli`] - clap argument definitions
//! - [`config`] - figment-based configuration loading and validation
//! - [`commands`] - `find` and `index` implementations
//! - [`report`] - dependency report rendering (text and JSON)
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status messages and spinners
//!
//! # Example
//!
//! ```rust,no_run
//! use javadeps_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod report;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
