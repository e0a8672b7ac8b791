//! Terminal UI utilities: status messages, spinners and listing formatting.
//!
//! Status output goes to stderr; only the dependency listing is written to
//! stdout so it can be piped.
//!
//! # Examples
//!
//! ```no_run
//! use javadeps_cli::ui;
//!
//! ui::init_colors(false);
//!
//! let spinner = ui::Spinner::new("Indexing src/main/java...");
//! spinner.finish("Indexed 120 types");
//!
//! ui::success("Found 12 dependencies");
//! ui::warning("Could not list changed files");
//! ```

mod format;
mod messages;
mod spinner;

use std::sync::atomic::{AtomicBool, Ordering};

pub use format::{format_duration, format_listing, pluralize};
pub use messages::{info, success, warning};
pub use spinner::Spinner;

static COLORS: AtomicBool = AtomicBool::new(true);

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var_os("CI").is_some()
        || std::env::var_os("GITHUB_ACTIONS").is_some()
        || std::env::var_os("GITLAB_CI").is_some()
        || std::env::var_os("JENKINS_URL").is_some()
}

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR, falls back to terminal detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr()
}

/// Decide once whether status output is colored.
///
/// Call early in `main`, after parsing `--no-color`.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    COLORS.store(enabled, Ordering::Relaxed);
    console::set_colors_enabled_stderr(enabled);
}

/// Whether status output is colored.
pub fn colors_enabled() -> bool {
    COLORS.load(Ordering::Relaxed)
}

/// Spinners only make sense on an interactive terminal.
pub fn spinners_enabled(quiet: bool) -> bool {
    !quiet && !is_ci() && console::user_attended_stderr()
}
