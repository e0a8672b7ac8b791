//! Per-file dependency extraction.
//!
//! The [`Extractor`] runs every rule in [`rules`] over a file's content and
//! turns the names they produce into paths: qualified imports through the
//! source root (kept only when the file exists), bare type names through the
//! [`NameIndex`]. Results of all rules are unioned.

pub mod rules;

use indexmap::IndexSet;

use crate::config::SOURCE_EXTENSION;
use crate::index::NameIndex;
use crate::path::SourcePath;
use crate::source::SourceReader;

/// Applies the extraction rules to one file at a time.
pub struct Extractor<'a> {
    index: &'a NameIndex,
    reader: &'a dyn SourceReader,
    source_root: SourcePath,
    base_package: String,
    extension: String,
}

impl<'a> Extractor<'a> {
    pub fn new(
        index: &'a NameIndex,
        reader: &'a dyn SourceReader,
        source_root: SourcePath,
        base_package: impl Into<String>,
    ) -> Self {
        Self {
            index,
            reader,
            source_root,
            base_package: base_package.into(),
            extension: SOURCE_EXTENSION.to_string(),
        }
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn reader(&self) -> &'a dyn SourceReader {
        self.reader
    }

    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    /// Candidate dependencies of `file`, given its content.
    pub fn extract(&self, file: &SourcePath, content: &str) -> IndexSet<SourcePath> {
        let mut dependencies = IndexSet::new();

        for qualified in rules::imports(content, &self.base_package) {
            if let Some(path) = self.resolve_qualified(qualified) {
                dependencies.insert(path);
            }
        }

        let symbols = rules::extends(content)
            .into_iter()
            .chain(rules::implements(content))
            .chain(rules::injected_fields(content))
            .chain(rules::constructor_injected_fields(content))
            .chain(rules::constructor_parameters(content));

        for symbol in symbols {
            dependencies.extend(self.index.resolve(&symbol, file).iter().cloned());
        }

        dependencies
    }

    /// Path of a qualified name under the source root, if that file exists.
    pub fn resolve_qualified(&self, qualified: &str) -> Option<SourcePath> {
        let relative = format!("{}.{}", qualified.replace('.', "/"), self.extension);
        let candidate = self.source_root.join(&relative);
        self.reader.is_file(&candidate).then_some(candidate)
    }
}
