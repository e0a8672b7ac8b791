//! Simple-name index over the source tree.
//!
//! Built once per run. Maps a bare type name (the file stem) to the file that
//! declares it, which is how `extends`, `implements` and injection sites are
//! resolved without a compiler. Two files with the same simple name in
//! different packages cannot both be right; [`CollisionStrategy`] decides what
//! happens and every collision is recorded either way.

use std::collections::hash_map::Entry;
use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::CollisionStrategy;
use crate::error::DiscoveryError;
use crate::path::SourcePath;

/// Two files that declared the same simple name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub name: String,
    pub existing: SourcePath,
    pub incoming: SourcePath,
}

/// Simple type name to file path lookup table.
#[derive(Debug, Clone, Default)]
pub struct NameIndex {
    strategy: CollisionStrategy,
    entries: FxHashMap<String, Vec<SourcePath>>,
    collisions: Vec<Collision>,
}

impl NameIndex {
    pub fn new(strategy: CollisionStrategy) -> Self {
        Self {
            strategy,
            entries: FxHashMap::default(),
            collisions: Vec::new(),
        }
    }

    /// Walk `root` and index every file with the given extension.
    ///
    /// Directory entries are visited in file-name order so "last" and "first"
    /// are stable across runs and platforms.
    pub fn build(
        root: &Path,
        extension: &str,
        strategy: CollisionStrategy,
    ) -> Result<Self, DiscoveryError> {
        let metadata =
            std::fs::metadata(root).map_err(|source| DiscoveryError::SourceRootUnreadable {
                path: root.to_path_buf(),
                source,
            })?;
        if !metadata.is_dir() {
            return Err(DiscoveryError::SourceRootNotDirectory(root.to_path_buf()));
        }

        let mut index = Self::new(strategy);
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(DiscoveryError::SourceRootUnreadable {
                        path: root.to_path_buf(),
                        source: err.into(),
                    });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry under source root");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let path = SourcePath::from_path(entry.path());
            if !path.has_extension(extension) {
                continue;
            }
            if let Some(name) = path.file_stem().map(str::to_string) {
                index.insert(&name, path)?;
            }
        }

        debug!(
            root = %root.display(),
            names = index.len(),
            collisions = index.collisions.len(),
            "built name index"
        );
        Ok(index)
    }

    /// Record `name -> path`, applying the collision strategy.
    pub fn insert(&mut self, name: &str, path: SourcePath) -> Result<(), DiscoveryError> {
        match self.entries.entry(name.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(vec![path]);
            }
            Entry::Occupied(mut slot) => {
                if slot.get().contains(&path) {
                    return Ok(());
                }
                let existing = slot.get()[0].clone();
                debug!(name, existing = %existing, incoming = %path, "name collision");

                match self.strategy {
                    CollisionStrategy::LastWins => *slot.get_mut() = vec![path.clone()],
                    CollisionStrategy::FirstWins => {}
                    CollisionStrategy::Multi => slot.get_mut().push(path.clone()),
                    CollisionStrategy::Error => {
                        return Err(DiscoveryError::NameCollision {
                            name: name.to_string(),
                            first: existing,
                            second: path,
                        });
                    }
                }
                self.collisions.push(Collision {
                    name: name.to_string(),
                    existing,
                    incoming: path,
                });
            }
        }
        Ok(())
    }

    /// Every path recorded for `name`. Empty when unknown.
    pub fn lookup(&self, name: &str) -> &[SourcePath] {
        self.entries.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Paths `name` resolves to when referenced from `referrer`.
    ///
    /// With several candidates (only possible under
    /// [`CollisionStrategy::Multi`]) a file in the referrer's own directory
    /// wins; otherwise all candidates are returned.
    pub fn resolve(&self, name: &str, referrer: &SourcePath) -> &[SourcePath] {
        let candidates = self.lookup(name);
        if candidates.len() <= 1 {
            return candidates;
        }
        let directory = referrer.parent();
        match candidates.iter().find(|c| c.parent() == directory) {
            Some(local) => std::slice::from_ref(local),
            None => candidates,
        }
    }

    pub fn strategy(&self) -> CollisionStrategy {
        self.strategy
    }

    pub fn collisions(&self) -> &[Collision] {
        &self.collisions
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&str, &[SourcePath])> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(name, paths)| (name.as_str(), paths.as_slice()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
