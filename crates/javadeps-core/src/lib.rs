//! # javadeps-core
//!
//! Heuristic dependency discovery for Java source trees.
//!
//! Given one source file, compute the transitive set of project files it
//! depends on. There is no compiler or grammar involved: a fixed set of
//! pattern rules (imports, `extends`, `implements`, injection annotations,
//! constructor parameters) proposes candidates, and a breadth-first closure
//! bounded by depth turns them into a dependency set.
//!
//! ## Architecture
//!
//! ```text
//!   entry file ──► Closure (BFS, depth bound)
//!                    │  per file
//!                    ▼
//!                 Extractor ──► rules::*      (raw names)
//!                    │
//!          ┌─────────┴──────────┐
//!          ▼                    ▼
//!     NameIndex            source root + SourceReader
//!   (simple names)         (qualified imports)
//!
//!   discovered ∩ ChangedFileProvider ──► filter_changed
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use javadeps_core::{DiskReader, Discovery, DiscoveryConfig, SourcePath};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let discovery = Discovery::new(DiscoveryConfig::default());
//! let index = discovery.build_index()?;
//! let entry = SourcePath::new("src/main/java/com/example/web/UserController.java");
//!
//! let outcome = discovery.run(&entry, &index, &DiskReader::new())?;
//! for path in outcome.sorted() {
//!     println!("{path}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error model
//!
//! Configuration problems (missing entry, unreadable source root, no base
//! package) are [`DiscoveryError`]s. Per-file problems are logged through
//! `tracing` and only reduce what is found.

pub mod changes;
pub mod closure;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod index;
pub mod package;
pub mod path;
pub mod source;

#[cfg(test)]
mod tests;

pub use changes::{ChangedFileProvider, GitDiff, StaticChanges, filter_changed, parse_name_only};
pub use closure::{Closure, ClosureOutcome, Traversal};
pub use config::{
    CollisionStrategy, DEFAULT_MAX_DEPTH, DEFAULT_PACKAGE_SEGMENTS, DEFAULT_SOURCE_ROOT,
    DiscoveryConfig, MaxDepth, SOURCE_EXTENSION,
};
pub use discovery::{Discovery, DiscoveryOutcome};
pub use error::{ChangeError, DiscoveryError};
pub use extract::Extractor;
pub use index::{Collision, NameIndex};
pub use package::{detect_base_package, package_declaration};
pub use path::SourcePath;
pub use source::{DiskReader, MemoryReader, SourceReader};
