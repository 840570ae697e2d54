//! Core CLI arguments structure and basic functionality
//!
//! Parsing helpers, configuration loading and validation live in
//! `parsing`, `config` and `validation`.

use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::scanner::config::{
    ScanConfig, DEFAULT_EXCLUDE_MARKERS, DEFAULT_EXTENSIONS, DEFAULT_ROOT, DEFAULT_TARGET,
};

pub const APP_NAME: &str = "sourcescan";

// Command-line options
//
// Every option can also come from the TOML configuration file; values given
// on the command line win.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(name = "sourcescan")]
#[command(about = "Find source files and lines containing a literal string")]
#[command(version)]
#[command(after_help = " * can be specified multiple times or as a comma-separated list")]
pub struct Args {
    /// Root directory to scan [default: .]
    #[arg(short = 'r', long = "root", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Literal text to search for (case-sensitive) [default: boldss]
    #[arg(short = 't', long = "target", value_name = "TEXT")]
    pub target: Option<String>,

    /// Path markers excluding a directory and its subtree* [default: node_modules,.next,.git]
    #[arg(short = 'x', long = "exclude", value_name = "MARKERS", action = ArgAction::Append)]
    pub exclude: Vec<String>,

    /// File extensions to search* [default: .tsx,.ts,.js,.jsx]
    #[arg(short = 'e', long = "extension", value_name = "EXTS", action = ArgAction::Append)]
    pub extensions: Vec<String>,

    /// Configuration file path
    #[arg(short = 'c', long = "config-file", value_name = "FILE")]
    pub config_file: Option<PathBuf>,

    /// Log files that could not be read or decoded as warnings
    #[arg(long = "report-skipped")]
    pub report_skipped: bool,

    /// Force colored output
    #[arg(long = "color", conflicts_with = "no_color")]
    pub color: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = ["trace", "debug", "info", "warn", "error", "off"])]
    pub log_level: Option<String>,

    /// Log file path (use 'none' to disable file logging)
    #[arg(short = 'f', long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log output format
    #[arg(short = 'o', long = "log-format", value_name = "FORMAT", value_parser = ["text", "ext", "json"])]
    pub log_format: Option<String>,

    /// More log output (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Parse a full argument list (including the program name)
    ///
    /// Help and version requests come back as `Err` as well; callers use
    /// `clap::Error::exit_code()` to tell them apart.
    pub fn parse_from_args(args: &[String]) -> Result<Self, clap::Error> {
        let color_choice = Self::color_choice(args);
        let cmd = Self::command()
            .long_version(crate::core::version::long_version())
            .color(color_choice)
            .styles(crate::core::styles::palette_to_clap(
                color_choice != clap::ColorChoice::Never,
            ));

        let matches = cmd.try_get_matches_from(args)?;
        Self::from_arg_matches(&matches)
    }

    /// Colour choice for clap's own output, decided from the raw arguments
    /// before anything is parsed
    fn color_choice(args: &[String]) -> clap::ColorChoice {
        if args.iter().any(|a| a == "--no-color") {
            clap::ColorChoice::Never
        } else if args.iter().any(|a| a == "--color") {
            clap::ColorChoice::Always
        } else {
            clap::ColorChoice::Auto
        }
    }

    /// Whether scan output should be coloured: flags first, then `NO_COLOR`,
    /// then TTY detection
    pub fn color_enabled(&self) -> bool {
        if self.no_color {
            false
        } else if self.color {
            true
        } else {
            std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
        }
    }

    /// Verbosity delta from `-v` / `-q`
    pub fn verbosity(&self) -> i8 {
        (self.verbose.min(10) as i8) - (self.quiet.min(10) as i8)
    }

    /// Log file to write to; `none` and `-` disable file logging
    pub fn log_file_path(&self) -> Option<&Path> {
        self.log_file.as_deref().filter(|path| {
            let s = path.to_string_lossy();
            !(s.eq_ignore_ascii_case("none") || s == "-")
        })
    }

    /// Build the immutable scanner configuration, filling gaps with defaults
    ///
    /// Expects `apply_enhanced_parsing` to have normalized the list options.
    pub fn scan_config(&self) -> ScanConfig {
        let exclude = if self.exclude.is_empty() {
            DEFAULT_EXCLUDE_MARKERS.iter().map(|s| s.to_string()).collect()
        } else {
            self.exclude.clone()
        };
        let extensions = if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.extensions.clone()
        };

        ScanConfig::new(
            self.root
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
            self.target.as_deref().unwrap_or(DEFAULT_TARGET),
            exclude,
            extensions,
        )
    }
}
