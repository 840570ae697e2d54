//! Core services and infrastructure

pub mod error_handling;
pub mod logging;
pub mod strings;
pub mod styles; // centralized styling palette for CLI output and help
pub mod validation;
pub mod version;
