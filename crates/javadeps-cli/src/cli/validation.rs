use javadeps_core::package::is_valid_package;

/// Parse and validate a base package name such as `com.example`.
///
/// Every dot-separated segment must be a Java identifier.
///
/// # Errors
///
/// Returns an error message if the name is empty or malformed.
pub fn parse_package(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Base package cannot be empty".to_string());
    }

    if !is_valid_package(s) {
        return Err(format!(
            "Base package must be dot-separated Java identifiers: '{}'",
            s
        ));
    }

    Ok(s.to_string())
}

/// Parse a traversal depth; zero is rejected.
pub fn parse_max_depth(s: &str) -> Result<usize, String> {
    parse_positive(s, "Max depth")
}

/// Parse a package segment count; zero is rejected.
pub fn parse_segments(s: &str) -> Result<usize, String> {
    parse_positive(s, "Package segments")
}

fn parse_positive(s: &str, what: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err(format!("{what} must be at least 1")),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("{what} must be a positive integer: '{s}'")),
    }
}
