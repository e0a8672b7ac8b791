//! Configuration for the javadeps CLI with multi-source loading.
//!
//! Merges settings from CLI args, environment variables and the config file.
//! Priority: CLI > Environment (`JAVADEPS_*`) > File > Defaults

mod conversions;
mod defaults;
mod loading;
mod validation;

use javadeps_core::{CollisionStrategy, DiscoveryConfig, MaxDepth};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub use conversions::ConfigOverrides;
pub use defaults::*;
pub use loading::DEFAULT_CONFIG_FILE;
pub use validation::*;

/// javadeps configuration - loaded from javadeps.config.json or CLI args.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JavadepsConfig {
    /// Root of the Java source tree
    #[serde(default = "default_src_root")]
    pub src_root: PathBuf,

    /// Package prefix of project code; detected from the entry file if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,

    /// Package segments kept when detecting the base package
    #[serde(default = "default_package_segments")]
    pub package_segments: usize,

    /// Maximum traversal depth
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Name collision handling (last-wins, first-wins, error, multi)
    #[serde(default)]
    pub collision: CollisionStrategy,

    /// Query git for modified files
    #[serde(default = "default_changed")]
    pub changed: bool,

    /// Revision to diff against; the working tree when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_base: Option<String>,
}

impl Default for JavadepsConfig {
    fn default() -> Self {
        Self {
            src_root: default_src_root(),
            base_package: None,
            package_segments: default_package_segments(),
            max_depth: default_max_depth(),
            collision: CollisionStrategy::default(),
            changed: default_changed(),
            diff_base: None,
        }
    }
}

impl JavadepsConfig {
    /// Discovery options for the core library.
    ///
    /// `src_root` is used as given; callers relativize it first.
    pub fn discovery_config(&self) -> DiscoveryConfig {
        DiscoveryConfig {
            source_root: self.src_root.clone(),
            base_package: self.base_package.clone(),
            package_segments: self.package_segments,
            max_depth: MaxDepth::new(self.max_depth),
            collision: self.collision,
            ..DiscoveryConfig::default()
        }
    }

    /// Generate example javadeps.config.json content.
    pub fn example_config() -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Self {
            base_package: Some("com.example".to_string()),
            diff_base: Some("origin/main".to_string()),
            ..Self::default()
        })
    }
}
