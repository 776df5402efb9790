use crate::analyzer::{ToolRunner, coverage};
use crate::config::types::Config;
use crate::display;
use std::path::PathBuf;

/// Run the full sweep (and optionally the dynamic coverage step) on one file.
pub fn handle_analyze(file: PathBuf, with_coverage: bool, config: &Config) -> crate::Result<()> {
    display::banner();
    display::sweep_preamble(&file);

    let runner = ToolRunner::new(&file, &config.lint);
    runner.sweep();

    if with_coverage {
        coverage::run_coverage(&file);
    }

    Ok(())
}
