use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lint: LintConfig,
    #[serde(default)]
    pub update: UpdateConfig,
}

/// Knobs passed through to the lint tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// Line length limit handed to pylint and flake8
    #[serde(default = "default_max_line_length")]
    pub max_line_length: u32,
    /// pylint message ids to disable
    #[serde(default = "default_pylint_disable")]
    pub pylint_disable: Vec<String>,
    /// flake8 error codes to ignore
    #[serde(default = "default_flake8_ignore")]
    pub flake8_ignore: Vec<String>,
}

/// Updater configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateConfig {
    /// Command used to upgrade the tool packages (e.g. "pip" or "pip3")
    #[serde(default = "default_pip_command")]
    pub pip_command: String,
}

fn default_max_line_length() -> u32 {
    150
}

fn default_pylint_disable() -> Vec<String> {
    vec!["W0311".to_string()]
}

fn default_flake8_ignore() -> Vec<String> {
    vec!["W191".to_string(), "E111".to_string(), "E114".to_string()]
}

fn default_pip_command() -> String {
    "pip".to_string()
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            pylint_disable: default_pylint_disable(),
            flake8_ignore: default_flake8_ignore(),
        }
    }
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            pip_command: default_pip_command(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_tool_tweaks() {
        let config = Config::default();
        assert_eq!(config.lint.max_line_length, 150);
        assert_eq!(config.lint.pylint_disable, vec!["W0311"]);
        assert_eq!(config.lint.flake8_ignore, vec!["W191", "E111", "E114"]);
        assert_eq!(config.update.pip_command, "pip");
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config: Config = toml::from_str("[lint]\nflake8_ignore = [\"E501\"]").unwrap();
        assert_eq!(config.lint.flake8_ignore, vec!["E501"]);
        assert_eq!(config.lint.max_line_length, 150);
        assert_eq!(config.update.pip_command, "pip");
    }
}
