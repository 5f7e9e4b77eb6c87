use std::collections::HashSet;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Matching thresholds and year table (see `MatchConfig::validate`)
/// - Content type names are unique, ignoring case
/// - Every content type lists at least one extension
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    config
        .matching
        .validate()
        .map_err(|e| ConfigError::ValidationError(format!("matching: {}", e)))?;

    let mut names = HashSet::new();
    for content_type in &config.content_types {
        if content_type.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "content type name cannot be empty".to_string(),
            ));
        }
        if !names.insert(content_type.name.to_lowercase()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate content type: {}",
                content_type.name
            )));
        }
        let has_extension = content_type
            .extensions
            .iter()
            .any(|e| !crate::reconcile::normalize_extension(e).is_empty());
        if !has_extension {
            return Err(ConfigError::ValidationError(format!(
                "content type '{}' has no extensions",
                content_type.name
            )));
        }
    }

    Ok(())
}
