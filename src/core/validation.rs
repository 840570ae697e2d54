//! Validation utilities for CLI arguments and configuration values

use crate::core::error_handling::ContextualError;

/// A user-fixable problem with arguments or configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }

    pub fn details(&self) -> &str {
        &self.message
    }
}

impl ContextualError for ValidationError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// Split every item on commas, trim the parts and drop empty ones.
///
/// With `dedup` set, later duplicates are removed and first occurrences keep
/// their position.
pub fn split_and_collect<T, F>(items: &[T], to_string: F, dedup: bool) -> Vec<String>
where
    F: Fn(&T) -> String,
{
    let mut result: Vec<String> = Vec::new();
    for item in items {
        for part in to_string(item).split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if dedup && result.iter().any(|existing| existing == part) {
                continue;
            }
            result.push(part.to_string());
        }
    }
    result
}

/// Normalize a file extension to a suffix with a leading dot.
///
/// Case is preserved since matching is case-sensitive.
pub fn validate_extension(ext: &str) -> Result<String, ValidationError> {
    let cleaned = ext.strip_prefix('.').unwrap_or(ext);

    if cleaned.is_empty() {
        return Err(ValidationError::new("Extension cannot be empty"));
    }

    if cleaned.contains('/') || cleaned.contains('\\') {
        return Err(ValidationError::new(&format!(
            "Extension '{}' cannot contain path separators",
            ext
        )));
    }

    Ok(format!(".{}", cleaned))
}
