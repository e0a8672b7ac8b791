use crate::config::JavadepsConfig;
use crate::error::{ConfigError, Result};
use javadeps_core::package::is_valid_package;

/// Validate a base package is dot-separated Java identifiers.
pub fn validate_base_package(name: &str) -> Result<()> {
    if !is_valid_package(name) {
        return Err(ConfigError::InvalidValue {
            field: "basePackage".to_string(),
            value: name.to_string(),
            hint: "Use dot-separated Java identifiers, e.g. com.example".to_string(),
        }
        .into());
    }
    Ok(())
}

impl JavadepsConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "maxDepth".to_string(),
                value: "0".to_string(),
                hint: "Use a depth of at least 1".to_string(),
            }
            .into());
        }

        if self.package_segments == 0 {
            return Err(ConfigError::InvalidValue {
                field: "packageSegments".to_string(),
                value: "0".to_string(),
                hint: "Keep at least one package segment".to_string(),
            }
            .into());
        }

        if let Some(base) = &self.base_package {
            validate_base_package(base)?;
        }

        if self.src_root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "srcRoot".to_string(),
                value: String::new(),
                hint: "Point srcRoot at the Java source directory".to_string(),
            }
            .into());
        }

        match &self.diff_base {
            Some(base) if base.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    field: "diffBase".to_string(),
                    value: base.clone(),
                    hint: "Name a git revision such as HEAD or origin/main".to_string(),
                }
                .into());
            }
            Some(_) if !self.changed => {
                return Err(ConfigError::ConflictingOptions(
                    "diffBase is set but changed is false".to_string(),
                )
                .into());
            }
            _ => {}
        }

        Ok(())
    }
}
