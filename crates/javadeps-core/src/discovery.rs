//! End-to-end discovery: fatal checks, base package, index, closure.

use tracing::info;

use crate::closure::{Closure, ClosureOutcome};
use crate::config::DiscoveryConfig;
use crate::error::DiscoveryError;
use crate::extract::Extractor;
use crate::index::NameIndex;
use crate::package::{detect_base_package, is_valid_package};
use crate::path::SourcePath;
use crate::source::SourceReader;

/// Result of a successful discovery run.
#[derive(Debug, Clone)]
pub struct DiscoveryOutcome {
    pub entry: SourcePath,
    pub base_package: String,
    pub closure: ClosureOutcome,
}

impl DiscoveryOutcome {
    /// Discovered files in display order.
    pub fn sorted(&self) -> Vec<&SourcePath> {
        self.closure.sorted()
    }
}

/// Runs discovery for one entry file with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    config: DiscoveryConfig,
}

impl Discovery {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn source_root(&self) -> SourcePath {
        SourcePath::from_path(&self.config.source_root)
    }

    /// Scan the configured source root.
    pub fn build_index(&self) -> Result<NameIndex, DiscoveryError> {
        NameIndex::build(
            &self.config.source_root,
            &self.config.extension,
            self.config.collision,
        )
    }

    pub fn ensure_entry(
        &self,
        entry: &SourcePath,
        reader: &dyn SourceReader,
    ) -> Result<(), DiscoveryError> {
        if reader.is_file(entry) {
            Ok(())
        } else {
            Err(DiscoveryError::EntryNotFound(entry.clone()))
        }
    }

    /// Configured base package, or the one detected from the entry file.
    pub fn base_package_for(
        &self,
        entry: &SourcePath,
        reader: &dyn SourceReader,
    ) -> Result<String, DiscoveryError> {
        if let Some(base) = &self.config.base_package {
            return Ok(base.clone());
        }

        let content =
            reader
                .read_to_string(entry)
                .map_err(|err| DiscoveryError::BasePackageUndetected {
                    entry: entry.clone(),
                    reason: err.to_string(),
                })?;

        detect_base_package(&content, self.config.package_segments)
            .filter(|base| is_valid_package(base))
            .ok_or_else(|| DiscoveryError::BasePackageUndetected {
                entry: entry.clone(),
                reason: "no package declaration found".to_string(),
            })
    }

    /// Compute the dependency closure of `entry`.
    pub fn run(
        &self,
        entry: &SourcePath,
        index: &NameIndex,
        reader: &dyn SourceReader,
    ) -> Result<DiscoveryOutcome, DiscoveryError> {
        self.ensure_entry(entry, reader)?;
        let base_package = self.base_package_for(entry, reader)?;

        info!(
            entry = %entry,
            base_package = %base_package,
            max_depth = self.config.max_depth.value(),
            "discovering dependencies"
        );

        let extractor = Extractor::new(index, reader, self.source_root(), base_package.clone())
            .with_extension(self.config.extension.clone());
        let closure = Closure::new(extractor).run(entry.clone(), self.config.max_depth);

        Ok(DiscoveryOutcome {
            entry: entry.clone(),
            base_package,
            closure,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CollisionStrategy;
    use crate::source::MemoryReader;

    fn config() -> DiscoveryConfig {
        DiscoveryConfig {
            source_root: "src/main/java".into(),
            ..DiscoveryConfig::default()
        }
    }

    #[test]
    fn test_missing_entry_is_fatal() {
        let discovery = Discovery::new(config());
        let reader = MemoryReader::new();
        let index = NameIndex::new(CollisionStrategy::LastWins);

        let err = discovery
            .run(&SourcePath::new("src/main/java/app/Missing.java"), &index, &reader)
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::EntryNotFound(_)));
    }

    #[test]
    fn test_base_package_detected_from_entry() {
        let reader = MemoryReader::new().with_file(
            "src/main/java/com/acme/web/Home.java",
            "package com.acme.web;\nclass Home {}",
        );
        let entry = SourcePath::new("src/main/java/com/acme/web/Home.java");

        let two = Discovery::new(config());
        assert_eq!(two.base_package_for(&entry, &reader).unwrap(), "com.acme");

        let three = Discovery::new(DiscoveryConfig {
            package_segments: 3,
            ..config()
        });
        assert_eq!(three.base_package_for(&entry, &reader).unwrap(), "com.acme.web");
    }

    #[test]
    fn test_explicit_base_package_wins() {
        let reader = MemoryReader::new().with_file("A.java", "class A {}");
        let discovery = Discovery::new(DiscoveryConfig {
            base_package: Some("org.sample".to_string()),
            ..config()
        });
        assert_eq!(
            discovery
                .base_package_for(&SourcePath::new("A.java"), &reader)
                .unwrap(),
            "org.sample"
        );
    }

    #[test]
    fn test_undetectable_base_package_is_fatal() {
        let reader = MemoryReader::new().with_file("A.java", "class A {}");
        let discovery = Discovery::new(config());
        let index = NameIndex::new(CollisionStrategy::LastWins);

        let err = discovery
            .run(&SourcePath::new("A.java"), &index, &reader)
            .unwrap_err();
        assert!(matches!(err, DiscoveryError::BasePackageUndetected { .. }));
    }
}
