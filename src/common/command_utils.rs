use crate::error::{Result, SweepError};
use std::ffi::OsStr;
use std::process::{Command, ExitStatus, Output};

/// Execute a command with captured stdout/stderr and return the output
pub fn execute_command<S: AsRef<OsStr>>(cmd: &str, args: &[S]) -> Result<Output> {
    let output = Command::new(cmd)
        .args(args)
        .output()
        .map_err(|e| SweepError::ToolSpawn {
            tool: cmd.to_string(),
            reason: e.to_string(),
        })?;

    Ok(output)
}

/// Execute a command with inherited stdio, returning only its exit status
pub fn run_passthrough<S: AsRef<OsStr>>(cmd: &str, args: &[S]) -> Result<ExitStatus> {
    let status = Command::new(cmd)
        .args(args)
        .status()
        .map_err(|e| SweepError::ToolSpawn {
            tool: cmd.to_string(),
            reason: e.to_string(),
        })?;

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_execute_command_missing_binary_is_spawn_error() {
        let err = execute_command("pysweep-no-such-binary", &["--version"]).unwrap_err();
        match err {
            SweepError::ToolSpawn { tool, .. } => {
                assert_eq!(tool, "pysweep-no-such-binary");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
