use clap::{CommandFactory, Parser};
use log::debug;
use pysweep::{cli::Cli, config};
use std::process;

fn main() {
    // The wrapper has always treated any internal failure as a clean exit:
    // nothing is printed and the exit code stays 0.
    if let Err(e) = run() {
        debug!("exiting quietly after error: {e}");
        process::exit(0);
    }
}

fn run() -> pysweep::Result<()> {
    // No arguments at all means "show me the help", not a usage error
    if std::env::args().len() <= 1 {
        Cli::command().print_long_help()?;
        println!();
        return Ok(());
    }

    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref())?;

    pysweep::run_command(&cli, &config)
}
