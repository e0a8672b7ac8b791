//! Command implementations for the javadeps CLI.
//!
//! - [`find`] - Dependency discovery for one entry file
//! - [`index`] - Name index diagnostics
//!
//! Each command provides an `execute` function that takes the parsed
//! arguments and returns a Result.

pub mod find;
pub mod index;
pub(crate) mod utils;

pub use find::execute as find_execute;
pub use index::execute as index_execute;
