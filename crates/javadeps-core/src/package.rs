//! Package declaration scanning and base package detection.

use std::sync::LazyLock;

use regex::Regex;

static PACKAGE_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*package\s+([\w.]+)\s*;").expect("package pattern is valid")
});

/// First `package` statement in `content`, if any.
pub fn package_declaration(content: &str) -> Option<&str> {
    PACKAGE_DECLARATION
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Keep the first `segments` dot-separated parts of a package name.
///
/// Shorter packages are returned unchanged.
pub fn truncate_package(package: &str, segments: usize) -> String {
    package
        .split('.')
        .take(segments.max(1))
        .collect::<Vec<_>>()
        .join(".")
}

/// Base package of a file: its package declaration cut to `segments` parts.
pub fn detect_base_package(content: &str, segments: usize) -> Option<String> {
    package_declaration(content).map(|package| truncate_package(package, segments))
}

/// Whether `name` is a dotted sequence of Java identifiers.
pub fn is_valid_package(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

/// Whether `qualified` belongs to `base`, on a segment boundary.
///
/// An empty base accepts everything.
pub fn in_package(qualified: &str, base: &str) -> bool {
    if base.is_empty() {
        return true;
    }
    match qualified.strip_prefix(base) {
        Some(rest) => rest.is_empty() || rest.starts_with('.'),
        None => false,
    }
}
