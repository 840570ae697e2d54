//! Common test utilities and helpers
//!
//! Shared fixtures for the scanner and CLI integration tests.

#![allow(dead_code)]

pub mod fixtures;
