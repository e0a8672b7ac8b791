use std::path::PathBuf;

use javadeps_core::{DEFAULT_MAX_DEPTH, DEFAULT_PACKAGE_SEGMENTS, DEFAULT_SOURCE_ROOT};

pub fn default_src_root() -> PathBuf {
    PathBuf::from(DEFAULT_SOURCE_ROOT)
}

pub fn default_package_segments() -> usize {
    DEFAULT_PACKAGE_SEGMENTS
}

pub fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

pub fn default_changed() -> bool {
    true
}
