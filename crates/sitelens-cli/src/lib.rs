//! Building blocks for the `sitelens` binary
//!
//! Kept in a library target so argument parsing and rendering can be tested
//! without running the CLI.

pub mod args;
pub mod render;
