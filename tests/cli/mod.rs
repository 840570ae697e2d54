//! CLI Integration Test Modules

pub mod scanning;
pub mod toml_config;
