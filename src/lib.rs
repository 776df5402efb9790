//! # Pysweep
//!
//! A Rust-based command-line wrapper around many different open-source SAST
//! tools, run against a single Python source file to get the broadest
//! possible impression of the code.
//!
//! ## Modes
//!
//! - **Sweep**: run pylint, flake8, mypy, bandit, pydocstyle, pytype,
//!   pyright and vulture in a fixed order and print each tool's report
//! - **Coverage**: additionally execute the file under coverage.py and print
//!   the line/branch table (a dynamic check)
//! - **Update**: best-effort `pip install --upgrade` of every tool package
//!
//! Every tool failure is informational only; the sweep never aborts and the
//! process never exits nonzero because of a tool.

pub mod analyzer;
pub mod cli;
pub mod common;
pub mod config;
pub mod display;
pub mod error;
pub mod handlers;
pub mod updater;

// Re-export commonly used types and functions
pub use analyzer::{AnalyzerKind, ToolRunner};
pub use error::{Result, SweepError};
pub use handlers::*;

use cli::Cli;
use clap::CommandFactory;
use config::types::Config;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatch one parsed invocation. Update wins over input, matching the
/// original dispatch order; with neither mode requested the help is shown.
pub fn run_command(cli: &Cli, config: &Config) -> Result<()> {
    if cli.update {
        handlers::handle_update(config)
    } else if let Some(input) = &cli.input {
        handlers::handle_analyze(input.clone(), cli.coverage, config)
    } else {
        Cli::command().print_long_help()?;
        println!();
        Ok(())
    }
}
