//! CLI argument validation utilities
//!
//! Runs after configuration merging and `apply_enhanced_parsing`. The root
//! directory is deliberately not checked here: a missing root is reported by
//! the scanner as a traversal failure.

use crate::core::validation::ValidationError;

use super::args::Args;

impl Args {
    /// Validate CLI arguments for consistency and constraints
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_target()?;
        self.validate_root()?;
        Ok(())
    }

    fn validate_target(&self) -> Result<(), ValidationError> {
        if let Some(target) = &self.target {
            if target.is_empty() {
                return Err(ValidationError::new(
                    "Option --target cannot be empty (an empty target matches every line)",
                ));
            }
        }
        Ok(())
    }

    fn validate_root(&self) -> Result<(), ValidationError> {
        if let Some(root) = &self.root {
            if root.as_os_str().is_empty() {
                return Err(ValidationError::new("Option --root cannot be empty"));
            }
        }
        Ok(())
    }
}
