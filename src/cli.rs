use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pysweep")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sweep a Python file through a battery of static-analysis tools")]
#[command(
    long_about = "A wrapper around many different open-source SAST tools, run in a fixed \
order against a single Python source file to get the broadest possible impression of the \
code: pylint, flake8, mypy, bandit, pydocstyle, pytype, pyright, vulture and coverage.py."
)]
pub struct Cli {
    /// File to analyze
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Update the underlying tools via pip
    #[arg(short, long)]
    pub update: bool,

    /// Also measure code coverage of the given file (dynamic check)
    #[arg(short, long)]
    pub coverage: bool,

    /// Path to configuration file
    #[arg(short = 'C', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all diagnostic logging
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analysis_flags() {
        let cli = Cli::parse_from(["pysweep", "--input", "app.py", "--coverage"]);
        assert_eq!(cli.input, Some(PathBuf::from("app.py")));
        assert!(cli.coverage);
        assert!(!cli.update);
    }

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::parse_from(["pysweep", "-i", "app.py", "-u", "-vv"]);
        assert_eq!(cli.input, Some(PathBuf::from("app.py")));
        assert!(cli.update);
        assert_eq!(cli.verbose, 2);
    }
}
