//! Error types for pysweep
//!
//! Every failure inside the sweep itself is downgraded to console output and
//! never reaches these types; they cover the plumbing around it.

use thiserror::Error;

/// Errors that can occur outside the per-tool report loop
#[derive(Debug, Error)]
pub enum SweepError {
    /// Underlying I/O failure (help output, config file reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An external tool binary could not be launched at all
    #[error("Failed to launch {tool}: {reason}")]
    ToolSpawn {
        /// Name of the tool binary
        tool: String,
        /// OS-level reason the spawn failed
        reason: String,
    },
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, SweepError>;
