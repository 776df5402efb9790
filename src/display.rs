//! Console presentation: banner, status prefixes and pacing.

use colored::Colorize;
use std::path::Path;
use std::thread;
use std::time::Duration;

const BANNER: &str = r#"

  _ __  _   _ _____      _____  ___ _ __
 | '_ \| | | / __\ \ /\ / / _ \/ _ \ '_ \
 | |_) | |_| \__ \\ V  V /  __/  __/ |_) |
 | .__/ \__, |___/ \_/\_/ \___|\___| .__/
 |_|    |___/                      |_|
"#;

const TOOL_LIST: &str = "Current used tools: pylint, flake8, mypy, bandit, \
pydocstyle, pytype, pyright, vulture and coverage.py";

/// Print the banner, version, separator and tool list, with a short pacing pause.
pub fn banner() {
    println!("{BANNER}");
    println!(" v{}\n", crate::VERSION);
    println!("###################################################################\n");
    pause();
    info(TOOL_LIST);
}

/// Print the caveats shown before every sweep.
pub fn sweep_preamble(file: &Path) {
    warning("This tool could contain false positives. Always review manually");
    info("Indentation style errors are currently disabled");
    info(&format!(
        "The following file will be analysed: {}",
        file.display()
    ));
}

pub fn info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

pub fn good(msg: &str) {
    println!("{} {}", "[+]".green().bold(), msg);
}

pub fn warning(msg: &str) {
    println!("{} {}", "[!]".yellow().bold(), msg);
}

pub fn bad(msg: &str) {
    println!("{} {}", "[-]".red().bold(), msg);
}

fn pause() {
    thread::sleep(Duration::from_millis(500));
}
