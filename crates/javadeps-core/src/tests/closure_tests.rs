//! Closure scenarios over real files on disk.

use super::test_helpers::*;
use crate::changes::{ChangedFileProvider, StaticChanges, filter_changed};
use crate::config::{CollisionStrategy, DiscoveryConfig, MaxDepth};
use crate::discovery::Discovery;
use crate::error::DiscoveryError;
use crate::path::SourcePath;
use crate::source::{DiskReader, MemoryReader};
use tempfile::TempDir;

#[test]
fn test_service_closure() {
    let temp = TempDir::new().unwrap();
    let root = create_service_project(&temp);

    let outcome = discover(&root, "com/acme/web/UserController.java", 50);

    assert_eq!(outcome.base_package, "com.acme");
    assert!(!outcome.closure.bound_reached);
    let expected = [
        "com/acme/web/UserController.java",
        "com/acme/web/BaseController.java",
        "com/acme/service/UserService.java",
        "com/acme/service/Lifecycle.java",
        "com/acme/data/UserRepository.java",
        "com/acme/model/User.java",
        "com/acme/audit/AuditLog.java",
    ];
    for rel in expected {
        assert!(outcome.closure.contains(&src(&root, rel)), "missing {rel}");
    }
    assert_eq!(outcome.closure.len(), expected.len());
    assert!(!outcome.closure.contains(&src(&root, "com/acme/unused/Orphan.java")));
}

#[test]
fn test_entry_is_first_discovered() {
    let temp = TempDir::new().unwrap();
    let root = create_service_project(&temp);

    let outcome = discover(&root, "com/acme/web/UserController.java", 50);
    assert_eq!(
        outcome.closure.discovered.first(),
        Some(&src(&root, "com/acme/web/UserController.java"))
    );
}

#[test]
fn test_depth_bound_keeps_partial_result() {
    let temp = TempDir::new().unwrap();
    let root = create_service_project(&temp);

    let outcome = discover(&root, "com/acme/web/UserController.java", 2);

    assert!(outcome.closure.bound_reached);
    assert_eq!(outcome.closure.levels, 2);
    assert_eq!(outcome.closure.len(), 4);
    assert!(outcome.closure.contains(&src(&root, "com/acme/audit/AuditLog.java")));
    assert!(!outcome.closure.contains(&src(&root, "com/acme/model/User.java")));
}

#[test]
fn test_exact_depth_is_not_reported_as_truncated() {
    let temp = TempDir::new().unwrap();
    let root = create_chain_project(&temp, 3);

    let outcome = discover(&root, "app/chain/Level0.java", 3);
    assert_eq!(outcome.closure.len(), 3);
    assert!(!outcome.closure.bound_reached);
}

#[test]
fn test_mutual_reference_terminates() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            (
                "src/main/java/app/A.java",
                &java("app", "import app.B;\npublic class A {}"),
            ),
            (
                "src/main/java/app/B.java",
                &java("app", "import app.A;\npublic class B {}"),
            ),
        ],
    );

    let outcome = discover(&root, "app/A.java", 150);

    assert_eq!(outcome.closure.len(), 2);
    assert!(outcome.closure.contains(&src(&root, "app/A.java")));
    assert!(outcome.closure.contains(&src(&root, "app/B.java")));
    assert!(!outcome.closure.bound_reached);
}

#[test]
fn test_import_of_missing_file_is_dropped() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            (
                "src/main/java/base/pkg/App.java",
                &java("base.pkg", "import base.pkg.Widget;\nimport base.pkg.Ghost;\nclass App {}"),
            ),
            (
                "src/main/java/base/pkg/Widget.java",
                &java("base.pkg", "class Widget {}"),
            ),
        ],
    );

    let outcome = discover(&root, "base/pkg/App.java", 50);
    assert!(outcome.closure.contains(&src(&root, "base/pkg/Widget.java")));
    assert_eq!(outcome.closure.len(), 2);
}

#[test]
fn test_unreadable_dependency_is_recoverable() {
    // Indexed name whose file is gone by the time it is expanded.
    let reader = MemoryReader::new().with_file(
        "src/main/java/app/Main.java",
        "package app;\npublic class Main extends Vanished {}",
    );
    let mut index = crate::index::NameIndex::new(CollisionStrategy::LastWins);
    index
        .insert("Vanished", SourcePath::new("src/main/java/app/Vanished.java"))
        .unwrap();

    let discovery = Discovery::new(DiscoveryConfig::default());
    let outcome = discovery
        .run(&SourcePath::new("src/main/java/app/Main.java"), &index, &reader)
        .unwrap();

    assert_eq!(outcome.closure.len(), 2);
    assert!(outcome.closure.contains(&SourcePath::new("src/main/java/app/Vanished.java")));
}

#[test]
fn test_multi_strategy_resolves_to_sibling() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            (
                "src/main/java/app/orders/Checkout.java",
                &java("app.orders", "public class Checkout extends Handler {}"),
            ),
            (
                "src/main/java/app/orders/Handler.java",
                &java("app.orders", "public class Handler {}"),
            ),
            (
                "src/main/java/app/users/Handler.java",
                &java("app.users", "public class Handler {}"),
            ),
        ],
    );

    let multi = discover_with(&root, "app/orders/Checkout.java", 50, CollisionStrategy::Multi);
    assert_eq!(multi.closure.len(), 2);
    assert!(multi.closure.contains(&src(&root, "app/orders/Handler.java")));

    let last = discover_with(&root, "app/orders/Checkout.java", 50, CollisionStrategy::LastWins);
    assert!(last.closure.contains(&src(&root, "app/users/Handler.java")));
}

#[test]
fn test_error_strategy_fails_index_build() {
    let temp = TempDir::new().unwrap();
    let root = create_test_project(
        &temp,
        &[
            ("src/main/java/a/Handler.java", "class Handler {}"),
            ("src/main/java/b/Handler.java", "class Handler {}"),
        ],
    );

    let discovery = Discovery::new(DiscoveryConfig {
        source_root: root.join("src/main/java"),
        collision: CollisionStrategy::Error,
        ..DiscoveryConfig::default()
    });
    assert!(matches!(
        discovery.build_index(),
        Err(DiscoveryError::NameCollision { .. })
    ));
}

#[test]
fn test_changed_subset() {
    let temp = TempDir::new().unwrap();
    let root = create_service_project(&temp);
    let outcome = discover(&root, "com/acme/web/UserController.java", 50);

    let changes: StaticChanges = [
        src(&root, "com/acme/service/UserService.java"),
        src(&root, "com/acme/unused/Orphan.java"),
    ]
    .into_iter()
    .collect();
    let changed = changes.changed_files().unwrap();

    let filtered = filter_changed(&outcome.closure.discovered, &changed);
    assert_eq!(
        filtered.into_iter().collect::<Vec<_>>(),
        vec![src(&root, "com/acme/service/UserService.java")]
    );
}

#[test]
fn test_relative_paths_through_rooted_reader() {
    let temp = TempDir::new().unwrap();
    let root = create_service_project(&temp);

    // Index paths relative to the project, as the CLI produces them.
    let mut index = crate::index::NameIndex::new(CollisionStrategy::LastWins);
    let absolute = crate::index::NameIndex::build(
        &root.join("src/main/java"),
        "java",
        CollisionStrategy::LastWins,
    )
    .unwrap();
    for (name, paths) in absolute.sorted_entries() {
        let rel = SourcePath::relative_to(paths[0].as_path(), &root);
        index.insert(name, rel).unwrap();
    }

    let discovery = Discovery::new(DiscoveryConfig {
        max_depth: MaxDepth::new(50),
        ..DiscoveryConfig::default()
    });
    let outcome = discovery
        .run(
            &SourcePath::new("src/main/java/com/acme/web/UserController.java"),
            &index,
            &DiskReader::rooted(&root),
        )
        .unwrap();

    assert_eq!(outcome.closure.len(), 7);
    assert!(
        outcome
            .sorted()
            .iter()
            .all(|p| p.as_str().starts_with("src/main/java/com/acme/"))
    );
}
