//! Discovery configuration types.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Default maximum depth for closure traversal.
///
/// Cycles are already broken by the processed set; the bound caps pathological
/// chains on very large trees.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Conventional Maven/Gradle source root.
pub const DEFAULT_SOURCE_ROOT: &str = "src/main/java";

/// Number of leading package segments kept when auto-detecting the base package.
///
/// `com.example.controller` becomes `com.example`.
pub const DEFAULT_PACKAGE_SEGMENTS: usize = 2;

/// Extension of the source files the index and import resolver consider.
pub const SOURCE_EXTENSION: &str = "java";

/// Maximum depth for closure traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaxDepth(pub usize);

impl MaxDepth {
    pub fn new(depth: usize) -> Self {
        Self(depth)
    }

    pub fn value(&self) -> usize {
        self.0
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self(DEFAULT_MAX_DEPTH)
    }
}

impl From<usize> for MaxDepth {
    fn from(depth: usize) -> Self {
        Self(depth)
    }
}

impl From<MaxDepth> for usize {
    fn from(depth: MaxDepth) -> Self {
        depth.0
    }
}

/// How the name index treats two files sharing a simple name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionStrategy {
    /// The file visited last in walk order wins.
    #[default]
    LastWins,
    /// The file visited first in walk order wins.
    FirstWins,
    /// Any collision aborts the index build.
    Error,
    /// Keep every path; resolution prefers a file in the referrer's directory
    /// and otherwise contributes all candidates.
    Multi,
}

impl CollisionStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollisionStrategy::LastWins => "last-wins",
            CollisionStrategy::FirstWins => "first-wins",
            CollisionStrategy::Error => "error",
            CollisionStrategy::Multi => "multi",
        }
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollisionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "last-wins" => Ok(CollisionStrategy::LastWins),
            "first-wins" => Ok(CollisionStrategy::FirstWins),
            "error" => Ok(CollisionStrategy::Error),
            "multi" => Ok(CollisionStrategy::Multi),
            other => Err(format!(
                "unknown collision strategy '{other}' (expected last-wins, first-wins, error or multi)"
            )),
        }
    }
}

/// Options for a discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Root of the source tree scanned by the name index and used to turn
    /// qualified imports into paths.
    pub source_root: PathBuf,

    /// Package prefix that marks an import as part of the project.
    ///
    /// Detected from the entry file when `None`.
    pub base_package: Option<String>,

    /// Segments kept when detecting the base package.
    pub package_segments: usize,

    /// Traversal bound.
    pub max_depth: MaxDepth,

    /// Name index collision handling.
    pub collision: CollisionStrategy,

    /// Source file extension, without the dot.
    pub extension: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            base_package: None,
            package_segments: DEFAULT_PACKAGE_SEGMENTS,
            max_depth: MaxDepth::default(),
            collision: CollisionStrategy::default(),
            extension: SOURCE_EXTENSION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_strategy_round_trips_through_str() {
        for strategy in [
            CollisionStrategy::LastWins,
            CollisionStrategy::FirstWins,
            CollisionStrategy::Error,
            CollisionStrategy::Multi,
        ] {
            assert_eq!(strategy.as_str().parse::<CollisionStrategy>(), Ok(strategy));
        }
        assert!("newest".parse::<CollisionStrategy>().is_err());
    }

    #[test]
    fn test_defaults() {
        let config = DiscoveryConfig::default();
        assert_eq!(config.max_depth.value(), DEFAULT_MAX_DEPTH);
        assert_eq!(config.package_segments, 2);
        assert_eq!(config.collision, CollisionStrategy::LastWins);
        assert_eq!(config.extension, "java");
    }
}
