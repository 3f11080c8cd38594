//! Tooling & Integration Layer
//!
//! Command-line access to the tree index.

pub mod cli;

pub use cli::{Cli, CliContext, Commands};
