//! Recursive source tree search for a literal string
//!
//! The `scanner` module does the work and can be used on its own; `app`
//! wraps it in a command-line tool.

pub mod app;
pub mod core;
pub mod scanner;
