//! List command handler.

use super::open_store;
use crate::config::load_config;
use crate::error::Result;
use crate::output::format_project_list;

/// Print every project with its position and short id.
pub fn list_command() -> Result<()> {
    let config = load_config()?;
    let store = open_store(&config)?;
    println!("{}", format_project_list(store.projects()));
    Ok(())
}
