//! # CLI Layer
//!
//! This module is one UI client for custbook. It is the only place that
//! parses arguments, writes to stdout/stderr, and installs logging. Exit
//! codes are decided by `main.rs` from the returned `Result`.
//!
//! - `setup`: clap definitions
//! - `commands`: context setup and per-command handlers
//! - `print`: message and table output
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
mod setup;

pub use commands::run;
