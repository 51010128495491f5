//! Check command implementation

use anyhow::Result;
use std::path::Path;

use crate::config::load_settings;

pub fn run(env_file: Option<&Path>) -> Result<()> {
    let settings = load_settings(env_file)?;

    println!("Configuration OK");
    println!("  api: {} {}", settings.api_title, settings.api_version);
    println!("  database: {}", settings.database_url);
    println!("  allowed origins: {}", settings.allowed_origins.len());
    Ok(())
}
