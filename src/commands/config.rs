//! Config command handler.
//!
//! Displays, modifies, and resets devdeck configuration values.

use crate::config::{config_path, load_config_at, save_config_at, Config};
use crate::error::Result;
use crate::output::{print_info, print_success, BOLD, CYAN, GRAY, RESET};
use crate::prompt;
use clap::Subcommand;
use std::path::Path;

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigSubcommand {
    /// Set a configuration value
    #[command(after_help = "VALID KEYS:
    editor       Program a project is opened with (e.g. code, zed, subl)
    editor_args  Arguments before the project path, space separated
    data_dir     Directory holding projects.json (empty to reset)")]
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Reset configuration to default values
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Show the config file location and its effective values.
pub fn config_display_command() -> Result<()> {
    let path = config_path()?;
    let config = load_config_at(&path)?;
    println!("{BOLD}# devdeck config{RESET}");
    println!("{GRAY}# {}{RESET}", path.display());
    println!();
    for line in display_lines(&config)? {
        println!("{line}");
    }
    Ok(())
}

pub fn config_set_command(key: &str, value: &str) -> Result<()> {
    let path = config_path()?;
    set_value_at(&path, key, value)?;
    print_success(&format!("Set {CYAN}{key}{RESET}"));
    Ok(())
}

pub fn config_reset_command(yes: bool) -> Result<()> {
    if !yes && !prompt::confirm("Reset devdeck configuration to defaults?", false) {
        print_info("Configuration unchanged.");
        return Ok(());
    }
    save_config_at(&config_path()?, &Config::default())?;
    print_success("Configuration reset to defaults");
    Ok(())
}

fn set_value_at(path: &Path, key: &str, value: &str) -> Result<Config> {
    let mut config = load_config_at(path)?;
    config.set(key, value)?;
    save_config_at(path, &config)?;
    Ok(config)
}

/// Render each key as `key = value`, with the data directory always shown.
fn display_lines(config: &Config) -> Result<Vec<String>> {
    let args = config
        .editor_args
        .iter()
        .map(|a| format!("{a:?}"))
        .collect::<Vec<_>>()
        .join(", ");
    let data_dir = config.resolved_data_dir()?;
    let data_note = if config.data_dir.is_none() {
        format!(" {GRAY}(default){RESET}")
    } else {
        String::new()
    };

    Ok(vec![
        format!("{CYAN}editor{RESET} = {:?}", config.editor),
        format!("{CYAN}editor_args{RESET} = [{args}]"),
        format!(
            "{CYAN}data_dir{RESET} = {:?}{data_note}",
            data_dir.display().to_string()
        ),
    ])
}
