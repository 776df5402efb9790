pub mod types;

use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".pysweep.toml";

/// Get the global config file path (~/.pysweep.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Get the local config file path (cwd/.pysweep.toml)
pub fn local_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Load configuration from file or use defaults.
/// An explicit path wins; otherwise the local config is checked first, then
/// the global one. Unreadable or malformed files fall back to defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<types::Config> {
    if let Some(path) = explicit {
        return Ok(read_config_file(path).unwrap_or_default());
    }

    let local = local_config_path();
    if local.exists() {
        if let Some(config) = read_config_file(&local) {
            return Ok(config);
        }
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            if let Some(config) = read_config_file(&global) {
                return Ok(config);
            }
        }
    }

    Ok(types::Config::default())
}

fn read_config_file(path: &Path) -> Option<types::Config> {
    let content = fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!("ignoring malformed config {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_explicit_config_overrides_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[lint]\nmax_line_length = 99\n\n[update]\npip_command = \"pip3\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.lint.max_line_length, 99);
        assert_eq!(config.update.pip_command, "pip3");
        // Untouched fields keep their defaults
        assert_eq!(config.lint.pylint_disable, vec!["W0311".to_string()]);
    }

    #[test]
    fn test_malformed_config_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this is not toml [[[").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.lint.max_line_length, 150);
    }

    #[test]
    fn test_missing_explicit_config_falls_back_to_defaults() {
        let config = load_config(Some(Path::new("/nonexistent/.pysweep.toml"))).unwrap();
        assert_eq!(config.update.pip_command, "pip");
    }
}
