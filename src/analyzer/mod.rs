//! # Analyzer Module
//!
//! Catalog of the external static-analysis tools the sweep runs, in their
//! fixed canonical order, plus the runner that invokes them and the dynamic
//! coverage step.

pub mod coverage;
pub mod runner;

pub use runner::ToolRunner;

use crate::config::types::LintConfig;
use std::path::Path;

/// One of the external static analyzers the sweep invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    Pylint,
    Flake8,
    Mypy,
    Bandit,
    Pydocstyle,
    Pytype,
    Pyright,
    Vulture,
}

impl AnalyzerKind {
    /// The fixed order the sweep runs the static tools in
    pub const SWEEP_ORDER: [AnalyzerKind; 8] = [
        AnalyzerKind::Pylint,
        AnalyzerKind::Flake8,
        AnalyzerKind::Mypy,
        AnalyzerKind::Bandit,
        AnalyzerKind::Pydocstyle,
        AnalyzerKind::Pytype,
        AnalyzerKind::Pyright,
        AnalyzerKind::Vulture,
    ];

    /// Tool name as shown in console output
    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerKind::Pylint => "pylint",
            AnalyzerKind::Flake8 => "flake8",
            AnalyzerKind::Mypy => "mypy",
            AnalyzerKind::Bandit => "bandit",
            AnalyzerKind::Pydocstyle => "pydocstyle",
            AnalyzerKind::Pytype => "pytype",
            AnalyzerKind::Pyright => "pyright",
            AnalyzerKind::Vulture => "vulture",
        }
    }

    /// Binary invoked for this tool (same as the display name for all nine)
    pub fn program(&self) -> &'static str {
        self.name()
    }

    /// Argument vector for analyzing `file`, including the per-tool tweaks
    pub fn args(&self, file: &Path, lint: &LintConfig) -> Vec<String> {
        let file = file.display().to_string();
        match self {
            AnalyzerKind::Pylint => vec![
                format!("--disable={}", lint.pylint_disable.join(",")),
                format!("--max-line-length={}", lint.max_line_length),
                file,
            ],
            AnalyzerKind::Flake8 => vec![
                format!("--ignore={}", lint.flake8_ignore.join(",")),
                format!("--max-line-length={}", lint.max_line_length),
                file,
            ],
            AnalyzerKind::Mypy => vec![file, "--ignore-missing-imports".to_string()],
            AnalyzerKind::Bandit
            | AnalyzerKind::Pydocstyle
            | AnalyzerKind::Pytype
            | AnalyzerKind::Pyright
            | AnalyzerKind::Vulture => vec![file],
        }
    }
}
