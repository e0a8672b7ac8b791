//! Index command implementation.
//!
//! Builds the name index the way `find` does and reports what it contains,
//! most usefully the simple names declared by more than one file.

use std::fmt::Write as _;

use javadeps_core::NameIndex;

use crate::cli::IndexArgs;
use crate::commands::utils;
use crate::config::ConfigOverrides;
use crate::error::Result;
use crate::ui::{self, format_listing, pluralize};

/// Execute the index command.
pub fn execute(args: IndexArgs, quiet: bool) -> Result<()> {
    let config = utils::load_config(&ConfigOverrides::from(&args), args.config.as_deref())?;
    let cwd = utils::get_cwd()?;
    let (discovery, src_root) = utils::discovery_for(&config, &cwd);

    let index = utils::build_index(&discovery, &src_root, quiet)?;
    print!("{}", render_index(&index, args.list));

    if !quiet && !index.collisions().is_empty() {
        ui::warning(&format!(
            "{} resolved with {}",
            pluralize(index.collisions().len(), "collision", "collisions"),
            index.strategy()
        ));
    }

    Ok(())
}

/// Text summary of an index: counts, collisions and optionally every entry.
pub fn render_index(index: &NameIndex, list: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Indexed {} ({} strategy)",
        pluralize(index.len(), "type name", "type names"),
        index.strategy()
    );

    let collisions = index.collisions();
    let _ = writeln!(out, "\nCollisions ({}):", collisions.len());
    if collisions.is_empty() {
        out.push_str("  (none)\n");
    } else {
        out.push_str(&format_listing(
            collisions
                .iter()
                .map(|c| format!("{}: {} <> {}", c.name, c.existing, c.incoming)),
            "  ",
        ));
    }

    if list {
        out.push_str("\nNames:\n");
        out.push_str(&format_listing(
            index.sorted_entries().into_iter().map(|(name, paths)| {
                let paths: Vec<&str> = paths.iter().map(|p| p.as_str()).collect();
                format!("{name} -> {}", paths.join(", "))
            }),
            "  ",
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use javadeps_core::{CollisionStrategy, SourcePath};

    #[test]
    fn test_render_without_collisions() {
        let mut index = NameIndex::new(CollisionStrategy::LastWins);
        index.insert("User", SourcePath::new("src/User.java")).unwrap();

        let text = render_index(&index, false);
        assert_eq!(
            text,
            "Indexed 1 type name (last-wins strategy)\n\nCollisions (0):\n  (none)\n"
        );
    }

    #[test]
    fn test_render_collisions_and_list() {
        let mut index = NameIndex::new(CollisionStrategy::Multi);
        index.insert("Handler", SourcePath::new("a/Handler.java")).unwrap();
        index.insert("Handler", SourcePath::new("b/Handler.java")).unwrap();

        let text = render_index(&index, true);
        assert!(text.contains("Collisions (1):\n  Handler: a/Handler.java <> b/Handler.java\n"));
        assert!(text.ends_with("Names:\n  Handler -> a/Handler.java, b/Handler.java\n"));
    }
}
