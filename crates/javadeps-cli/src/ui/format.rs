//! Formatting helpers for durations, counts and path listings.

use std::fmt::Display;
use std::time::Duration;

/// Format duration in human-readable format (ms, s, m:s).
///
/// ```
/// use std::time::Duration;
/// use javadeps_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// `1 dependency`, `3 dependencies`.
pub fn pluralize(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

/// One item per line, each prefixed with `indent`.
pub fn format_listing<I, T>(items: I, indent: &str) -> String
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    items
        .into_iter()
        .map(|item| format!("{indent}{item}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds_and_minutes() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize(1, "dependency", "dependencies"), "1 dependency");
        assert_eq!(pluralize(0, "dependency", "dependencies"), "0 dependencies");
        assert_eq!(pluralize(4, "type", "types"), "4 types");
    }

    #[test]
    fn test_format_listing() {
        assert_eq!(format_listing(["a.java", "b.java"], "  "), "  a.java\n  b.java\n");
        assert_eq!(format_listing(Vec::<String>::new(), ""), "");
    }
}
