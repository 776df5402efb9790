//! Sequential tool runner: one blocking subprocess per analyzer, output
//! captured and reported immediately. Tool failures never escape this module.

use crate::analyzer::AnalyzerKind;
use crate::common::command_utils;
use crate::config::types::LintConfig;
use crate::display;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use std::path::Path;
use std::process::Output;
use std::time::Duration;

pub struct ToolRunner<'a> {
    file: &'a Path,
    lint: &'a LintConfig,
}

impl<'a> ToolRunner<'a> {
    pub fn new(file: &'a Path, lint: &'a LintConfig) -> Self {
        Self { file, lint }
    }

    /// Run every static tool in canonical order against the target file.
    pub fn sweep(&self) {
        for kind in AnalyzerKind::SWEEP_ORDER {
            self.run_tool(kind);
        }
    }

    fn run_tool(&self, kind: AnalyzerKind) {
        display::info(&format!("Running {} \n", kind.name()));

        let args = kind.args(self.file, self.lint);
        debug!("invoking {} {:?}", kind.program(), args);

        let spinner = tool_spinner(kind.name());
        let result = command_utils::execute_command(kind.program(), &args);
        spinner.finish_and_clear();

        match result {
            Ok(output) => self.report(kind, &output),
            Err(e) => {
                debug!("{} could not be launched: {}", kind.name(), e);
                display::warning(&format!(
                    "{} is not installed or could not be launched, skipping \
                     (install it with: pip install {})\n",
                    kind.name(),
                    kind.program()
                ));
            }
        }
    }

    fn report(&self, kind: AnalyzerKind, output: &Output) {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        match kind {
            // vulture exits 0 only when nothing suspicious was found
            AnalyzerKind::Vulture if output.status.success() => {
                display::good("vulture output: \nNo dead code found!\n");
            }
            // mypy reports on stdout, falls back to its error channel
            AnalyzerKind::Mypy => {
                if !stdout.trim().is_empty() {
                    display::good(&format!("mypy output: \n{stdout}"));
                } else if !stderr.trim().is_empty() {
                    display::bad(&stderr);
                } else {
                    display::bad(&format!("\nExit status: {}", output.status));
                }
            }
            _ => {
                if stdout.trim().is_empty() {
                    display::good(&format!(
                        "{} output: \nNo findings reported.\n",
                        kind.name()
                    ));
                } else {
                    display::good(&format!("{} output: \n{}", kind.name(), stdout));
                }
            }
        }
    }
}

fn tool_spinner(name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("waiting for {name}..."));
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}
