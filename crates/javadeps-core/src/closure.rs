//! Breadth-first, depth-bounded dependency closure.
//!
//! Traversal state lives in a [`Traversal`] value created per run, so a
//! [`Closure`] can be reused and two runs over the same tree agree.
//!
//! Each step drains exactly the files that were queued when the step began;
//! anything discovered during the step waits for the next one. A file found at
//! level N is therefore expanded at level N+1, and the processed set keeps
//! cycles (A -> B -> A) from being expanded twice.

use std::collections::VecDeque;

use indexmap::IndexSet;
use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::config::MaxDepth;
use crate::extract::Extractor;
use crate::path::SourcePath;

/// Result of a closure run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureOutcome {
    /// Every visited file, entry included, in discovery order.
    pub discovered: IndexSet<SourcePath>,
    /// Number of levels drained.
    pub levels: usize,
    /// Traversal stopped at the depth bound with work still queued.
    pub bound_reached: bool,
}

impl ClosureOutcome {
    pub fn sorted(&self) -> Vec<&SourcePath> {
        let mut paths: Vec<_> = self.discovered.iter().collect();
        paths.sort();
        paths
    }

    pub fn len(&self) -> usize {
        self.discovered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discovered.is_empty()
    }

    pub fn contains(&self, path: &SourcePath) -> bool {
        self.discovered.contains(path)
    }
}

/// Explicit traversal state: frontier, processed and discovered sets.
#[derive(Debug, Clone)]
pub struct Traversal {
    frontier: VecDeque<SourcePath>,
    processed: FxHashSet<SourcePath>,
    discovered: IndexSet<SourcePath>,
    depth: usize,
}

impl Traversal {
    pub fn new(entry: SourcePath) -> Self {
        Self {
            frontier: VecDeque::from([entry]),
            processed: FxHashSet::default(),
            discovered: IndexSet::new(),
            depth: 0,
        }
    }

    /// Drain one level, expanding each not-yet-processed file with `expand`.
    pub fn step<F>(&mut self, mut expand: F)
    where
        F: FnMut(&SourcePath) -> IndexSet<SourcePath>,
    {
        let batch = self.frontier.len();
        for _ in 0..batch {
            let Some(current) = self.frontier.pop_front() else {
                break;
            };
            if !self.processed.insert(current.clone()) {
                continue;
            }
            self.discovered.insert(current.clone());

            for dependency in expand(&current) {
                if !self.processed.contains(&dependency) {
                    self.frontier.push_back(dependency);
                }
            }
        }
        self.depth += 1;
    }

    /// Whether anything queued still needs expanding.
    pub fn has_pending(&self) -> bool {
        self.frontier
            .iter()
            .any(|path| !self.processed.contains(path))
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn discovered(&self) -> &IndexSet<SourcePath> {
        &self.discovered
    }

    pub fn processed(&self) -> &FxHashSet<SourcePath> {
        &self.processed
    }

    pub fn frontier(&self) -> &VecDeque<SourcePath> {
        &self.frontier
    }

    pub fn finish(self) -> ClosureOutcome {
        let bound_reached = self.has_pending();
        ClosureOutcome {
            discovered: self.discovered,
            levels: self.depth,
            bound_reached,
        }
    }
}

/// Closure engine: reads each frontier file and extracts its dependencies.
pub struct Closure<'a> {
    extractor: Extractor<'a>,
}

impl<'a> Closure<'a> {
    pub fn new(extractor: Extractor<'a>) -> Self {
        Self { extractor }
    }

    /// Dependencies of one file. Unreadable files contribute nothing.
    pub fn expand(&self, file: &SourcePath) -> IndexSet<SourcePath> {
        match self.extractor.reader().read_to_string(file) {
            Ok(content) => {
                let dependencies = self.extractor.extract(file, &content);
                debug!(file = %file, found = dependencies.len(), "expanded");
                dependencies
            }
            Err(err) => {
                warn!(file = %file, error = %err, "failed to read source file, skipping");
                IndexSet::new()
            }
        }
    }

    /// Transitive dependencies of `entry` within `max_depth` levels.
    pub fn run(&self, entry: SourcePath, max_depth: MaxDepth) -> ClosureOutcome {
        let mut traversal = Traversal::new(entry);
        while traversal.has_pending() && traversal.depth() < max_depth.value() {
            traversal.step(|file| self.expand(file));
        }

        let outcome = traversal.finish();
        if outcome.bound_reached {
            warn!(
                max_depth = max_depth.value(),
                discovered = outcome.len(),
                "maximum depth reached, dependency list may be incomplete"
            );
        }
        outcome
    }
}
