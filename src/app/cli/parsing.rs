//! Comma-separated value parsing and normalization of list options

use crate::core::validation::{split_and_collect, validate_extension, ValidationError};

use super::args::Args;

impl Args {
    /// Split comma-separated lists, drop duplicates and normalize extensions
    pub fn apply_enhanced_parsing(&mut self) -> Result<(), ValidationError> {
        self.exclude = Self::parse_non_empty_list(&self.exclude, "--exclude")?;
        let extensions = Self::parse_non_empty_list(&self.extensions, "--extension")?;
        self.extensions = Self::normalize_extensions(&extensions)?;
        Ok(())
    }

    /// Parse comma-separated strings from a vector of Strings with deduplication
    pub fn parse_comma_separated_strings(strings: &[String]) -> Vec<String> {
        split_and_collect(strings, |s| s.clone(), true)
    }

    /// Like `parse_comma_separated_strings`, but an option that was given
    /// only with blank values is an error rather than "use the default"
    fn parse_non_empty_list(
        strings: &[String],
        option: &str,
    ) -> Result<Vec<String>, ValidationError> {
        let parsed = Self::parse_comma_separated_strings(strings);
        if parsed.is_empty() && !strings.is_empty() {
            return Err(ValidationError::new(&format!(
                "Option {} requires at least one non-empty value",
                option
            )));
        }
        Ok(parsed)
    }

    /// Give every extension a leading dot; `ts` and `.ts` end up the same
    fn normalize_extensions(extensions: &[String]) -> Result<Vec<String>, ValidationError> {
        let mut normalized: Vec<String> = Vec::new();
        for ext in extensions {
            let ext = validate_extension(ext)?;
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Ok(normalized)
    }
}
