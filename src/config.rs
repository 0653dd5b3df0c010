//! User configuration stored in `~/.config/devdeck/config.toml`.

use crate::error::{DevdeckError, Result};
use crate::launcher::EditorCommand;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The base config directory name under ~/.config/
const CONFIG_DIR_NAME: &str = "devdeck";

/// The config file name within the config directory.
const CONFIG_FILENAME: &str = "config.toml";

/// Keys accepted by `devdeck config set`.
pub const VALID_KEYS: &[&str] = &["editor", "editor_args", "data_dir"];

// ============================================================================
// Configuration
// ============================================================================

/// User preferences for how projects are opened and where they are stored.
///
/// Missing fields fall back to their defaults, so partial files work.
///
/// # Example
///
/// ```toml
/// editor = "code"
/// editor_args = ["--new-window"]
/// data_dir = "/home/me/.local/share/devdeck"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Program a project path is handed to.
    #[serde(default = "default_editor")]
    pub editor: String,

    /// Arguments placed before the project path.
    #[serde(default)]
    pub editor_args: Vec<String>,

    /// Directory holding `projects.json`. Defaults to the config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_editor() -> String {
    Platform::current().default_editor().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: default_editor(),
            editor_args: Vec::new(),
            data_dir: None,
        }
    }
}

impl Config {
    pub fn editor_command(&self) -> EditorCommand {
        EditorCommand::new(&self.editor, self.editor_args.clone())
    }

    /// Where the project list lives.
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => config_dir(),
        }
    }

    /// Set `key` from its command-line string form.
    ///
    /// `editor_args` is split on whitespace; an empty `data_dir` clears the override.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "editor" => {
                let value = value.trim();
                if value.is_empty() {
                    return Err(DevdeckError::Config("editor cannot be empty".to_string()));
                }
                self.editor = value.to_string();
            }
            "editor_args" => {
                self.editor_args = value.split_whitespace().map(str::to_string).collect();
            }
            "data_dir" => {
                let value = value.trim();
                self.data_dir = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => {
                return Err(DevdeckError::Config(format!(
                    "Unknown config key '{}'. Valid keys: {}",
                    key,
                    VALID_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

const CONFIG_HEADER: &str = r#"# devdeck configuration
#
# editor      - program a project is opened with (its path is the last argument)
# editor_args - extra arguments placed before the path, e.g. ["--new-window"]
# data_dir    - directory holding projects.json (defaults to this directory)

"#;

/// Render a config file with the explanatory header.
fn generate_config_with_comments(config: &Config) -> Result<String> {
    let body = toml::to_string(config)
        .map_err(|e| DevdeckError::Config(format!("Failed to serialize config: {}", e)))?;
    Ok(format!("{CONFIG_HEADER}{body}"))
}

// ============================================================================
// Config File Management
// ============================================================================

/// Get the devdeck config directory path (~/.config/devdeck/).
///
/// Does not create the directory.
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DevdeckError::Config("Could not determine home directory".to_string()))?;
    Ok(home.join(".config").join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (~/.config/devdeck/config.toml).
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILENAME))
}

/// Load `~/.config/devdeck/config.toml`, writing a commented default file
/// first if it doesn't exist.
pub fn load_config() -> Result<Config> {
    load_config_at(&config_path()?)
}

/// Save the config to `~/.config/devdeck/config.toml`, replacing any user comments.
pub fn save_config(config: &Config) -> Result<()> {
    save_config_at(&config_path()?, config)
}

pub(crate) fn load_config_at(path: &Path) -> Result<Config> {
    if !path.exists() {
        let config = Config::default();
        save_config_at(path, &config)?;
        return Ok(config);
    }
    read_config_file(path)
}

/// Parse a config file without creating it.
pub fn read_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        DevdeckError::Config(format!(
            "Failed to parse config file at {:?}: {}",
            path, e
        ))
    })
}

pub(crate) fn save_config_at(path: &Path, config: &Config) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_with_comments(config)?)?;
    Ok(())
}
