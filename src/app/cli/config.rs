//! TOML configuration file parsing and loading
//!
//! The default file lives in the platform configuration directory
//! (`~/.config/Sourcescan/sourcescan.toml` on Linux) and is only read if it
//! exists. A file named with `--config-file` must exist.
//!
//! ```toml
//! root = "/home/me/projects/web"
//! target = "boldss"
//! exclude = ["node_modules", ".next", ".git", "dist"]
//! extensions = ".ts,.tsx"
//! report-skipped = true
//! log-level = "warn"
//! ```

use crate::core::error_handling::ContextualError;
use crate::core::strings::title_case;
use crate::core::validation::ValidationError;
use std::path::{Path, PathBuf};

use super::args::{Args, APP_NAME};

/// Failure to load a configuration file
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ConfigError {
    pub path: PathBuf,
    message: String,
}

impl ConfigError {
    fn missing(path: &Path) -> Self {
        Self::with_message(
            path,
            format!(
                "The specified configuration file does not exist: {}",
                path.display()
            ),
        )
    }

    fn with_message(path: &Path, message: String) -> Self {
        Self {
            path: path.to_path_buf(),
            message,
        }
    }
}

impl ContextualError for ConfigError {
    fn is_user_actionable(&self) -> bool {
        true
    }

    fn user_message(&self) -> Option<&str> {
        Some(&self.message)
    }
}

/// `<config dir>/Sourcescan/sourcescan.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| {
        d.join(title_case(APP_NAME))
            .join(format!("{}.toml", APP_NAME))
    })
}

impl Args {
    /// Locate and apply the configuration file
    ///
    /// Returns the path that was loaded, if any.
    pub fn load_config_file(&mut self) -> Result<Option<PathBuf>, ConfigError> {
        let config_path = match &self.config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::missing(path));
                }
                Some(path.clone())
            }
            None => default_config_path().filter(|path| path.exists()),
        };

        match config_path {
            Some(path) => {
                self.apply_config_from_path(&path)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }

    /// Read, parse and apply one TOML file
    pub fn apply_config_from_path(&mut self, path: &Path) -> Result<(), ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::with_message(
                path,
                format!("Error reading configuration file {}: {}", path.display(), e),
            )
        })?;

        let config = toml::from_str::<toml::Table>(&contents).map_err(|e| {
            ConfigError::with_message(
                path,
                format!("Error parsing configuration file {}: {}", path.display(), e),
            )
        })?;

        Self::apply_toml_values(self, &config).map_err(|e| {
            ConfigError::with_message(
                path,
                format!(
                    "Error in configuration file validation {}: {}",
                    path.display(),
                    e
                ),
            )
        })
    }

    /// Apply TOML configuration values to Args
    ///
    /// Only options the command line left unset are taken from the file.
    pub fn apply_toml_values(args: &mut Self, config: &toml::Table) -> Result<(), ValidationError> {
        if args.root.is_none() {
            if let Some(root) = Self::string_value(config, "root")? {
                args.root = Some(PathBuf::from(root));
            }
        }
        if args.target.is_none() {
            args.target = Self::string_value(config, "target")?;
        }
        if args.exclude.is_empty() {
            args.exclude = Self::string_array_value(config, "exclude")?;
        }
        if args.extensions.is_empty() {
            args.extensions = Self::string_array_value(config, "extensions")?;
        }
        if !args.report_skipped {
            args.report_skipped = Self::bool_value(config, "report-skipped")?.unwrap_or(false);
        }

        // Colour flags only apply if neither was given on the command line
        if !args.color && !args.no_color {
            match (
                Self::bool_value(config, "color")?,
                Self::bool_value(config, "no-color")?,
            ) {
                (_, Some(true)) | (Some(false), _) => args.no_color = true,
                (Some(true), _) => args.color = true,
                _ => {}
            }
        }

        if args.log_level.is_none() {
            args.log_level = Self::string_value(config, "log-level")?;
        }
        if args.log_file.is_none() {
            args.log_file = Self::string_value(config, "log-file")?.map(PathBuf::from);
        }
        if args.log_format.is_none() {
            args.log_format = Self::string_value(config, "log-format")?;
        }

        Self::validate_choice(
            &args.log_level,
            "log-level",
            &["trace", "debug", "info", "warn", "error", "off"],
        )?;
        Self::validate_choice(&args.log_format, "log-format", &["text", "ext", "json"])?;

        Ok(())
    }

    fn string_value(config: &toml::Table, key: &str) -> Result<Option<String>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(ValidationError::new(&format!(
                "Configuration key '{}' must be a string",
                key
            ))),
        }
    }

    fn bool_value(config: &toml::Table, key: &str) -> Result<Option<bool>, ValidationError> {
        match config.get(key) {
            None => Ok(None),
            Some(toml::Value::Boolean(b)) => Ok(Some(*b)),
            Some(_) => Err(ValidationError::new(&format!(
                "Configuration key '{}' must be true or false",
                key
            ))),
        }
    }

    /// Accepts both a single (possibly comma-separated) string and an array of strings
    fn string_array_value(config: &toml::Table, key: &str) -> Result<Vec<String>, ValidationError> {
        let type_error = || {
            ValidationError::new(&format!(
                "Configuration key '{}' must be a string or an array of strings",
                key
            ))
        };

        match config.get(key) {
            None => Ok(Vec::new()),
            Some(toml::Value::String(s)) => Ok(vec![s.clone()]),
            Some(toml::Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string).ok_or_else(type_error))
                .collect(),
            Some(_) => Err(type_error()),
        }
    }

    fn validate_choice(
        value: &Option<String>,
        key: &str,
        choices: &[&str],
    ) -> Result<(), ValidationError> {
        match value {
            Some(v) if !choices.contains(&v.as_str()) => Err(ValidationError::new(&format!(
                "Invalid {} '{}' (expected one of: {})",
                key,
                v,
                choices.join(", ")
            ))),
            _ => Ok(()),
        }
    }
}
