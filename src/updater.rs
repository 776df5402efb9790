//! Best-effort upgrade of the nine underlying tool packages via pip.

use crate::common::command_utils;
use crate::config::types::UpdateConfig;
use crate::display;
use log::{debug, warn};

/// pip packages behind the sweep, one per tool plus coverage.py
pub const PIP_PACKAGES: [&str; 9] = [
    "pylint",
    "flake8",
    "mypy",
    "bandit",
    "pydocstyle",
    "pytype",
    "pyright",
    "vulture",
    "coverage",
];

/// Upgrade every tool package. Individual failures are logged and ignored;
/// the success message prints unconditionally, as the wrapper always has.
pub fn update_packages(update: &UpdateConfig) {
    display::info("Updating packages...");

    for package in PIP_PACKAGES {
        debug!("upgrading {package} via {}", update.pip_command);
        match command_utils::execute_command(
            &update.pip_command,
            &["install", "--upgrade", package],
        ) {
            Ok(output) if !output.status.success() => {
                warn!(
                    "{} exited with {} while upgrading {}",
                    update.pip_command, output.status, package
                );
            }
            Err(e) => {
                warn!("could not run {}: {}", update.pip_command, e);
            }
            Ok(_) => {}
        }
    }

    display::good("Packages updated!\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::AnalyzerKind;

    #[test]
    fn test_one_package_per_tool_plus_coverage() {
        assert_eq!(PIP_PACKAGES.len(), 9);
        for kind in AnalyzerKind::SWEEP_ORDER {
            assert!(PIP_PACKAGES.contains(&kind.program()));
        }
        assert!(PIP_PACKAGES.contains(&"coverage"));
    }

    #[test]
    fn test_update_never_fails_without_pip() {
        let update = UpdateConfig {
            pip_command: "pysweep-no-such-pip".to_string(),
        };
        // Must not panic or error out, only print and log
        update_packages(&update);
    }
}
