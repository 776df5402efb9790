//! Dynamic coverage step: executes the target file under coverage.py and
//! reports the line/branch table. Only runs when the coverage flag is set.

use crate::common::command_utils;
use crate::display;
use log::debug;
use std::path::Path;

const COVERAGE_PROGRAM: &str = "coverage";

/// Run `coverage run --branch <file>` (output passed through, the target may
/// print whatever it likes) followed by a captured `coverage report`.
pub fn run_coverage(file: &Path) {
    display::info("Running coverage.py \n");

    let file_arg = file.display().to_string();

    match command_utils::run_passthrough(COVERAGE_PROGRAM, &["run", "--branch", file_arg.as_str()])
    {
        Ok(status) => debug!("coverage run exited with {status}"),
        Err(e) => {
            debug!("coverage could not be launched: {e}");
            display::warning(
                "coverage.py is not installed or could not be launched, skipping \
                 (install it with: pip install coverage)\n",
            );
            return;
        }
    }

    match command_utils::execute_command(COVERAGE_PROGRAM, &["report", "-i", "-m", file_arg.as_str()])
    {
        Ok(output) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            display::good(&format!("Coverage.py output: \n{stdout}"));
        }
        Err(e) => {
            debug!("coverage report could not be launched: {e}");
            display::warning("coverage.py produced no report\n");
        }
    }
}
