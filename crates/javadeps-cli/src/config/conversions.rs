use javadeps_core::CollisionStrategy;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::{FindArgs, IndexArgs};

/// Values given on the command line.
///
/// Unset fields are skipped when serialized so they never mask file or
/// environment settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_segments: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collision: Option<CollisionStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_base: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<&FindArgs> for ConfigOverrides {
    fn from(args: &FindArgs) -> Self {
        Self {
            src_root: args.src_root.clone(),
            base_package: args.base_package.clone(),
            package_segments: args.package_segments,
            max_depth: args.max_depth,
            collision: args.collision.map(Into::into),
            changed: args.no_changed.then_some(false),
            diff_base: args.diff_base.clone(),
        }
    }
}

impl From<&IndexArgs> for ConfigOverrides {
    fn from(args: &IndexArgs) -> Self {
        Self {
            src_root: args.src_root.clone(),
            collision: args.collision.map(Into::into),
            ..Self::default()
        }
    }
}
