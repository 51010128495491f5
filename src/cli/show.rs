//! Show command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::Path;

use crate::config::load_settings;
use crate::config::loader::{
    ENV_ALLOWED_ORIGINS, ENV_API_DESCRIPTION, ENV_API_TITLE, ENV_API_VERSION, ENV_DATABASE_URL,
};
use crate::domain::Settings;

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Format {
    /// Human-readable field listing
    Text,
    /// JSON object
    Json,
    /// Dotenv-style KEY=VALUE lines
    Env,
}

pub fn run(env_file: Option<&Path>, args: ShowArgs) -> Result<()> {
    let settings = load_settings(env_file)?;

    match args.format {
        Format::Text => print_text(&settings),
        Format::Json => println!("{}", serde_json::to_string_pretty(&settings)?),
        Format::Env => print_env(&settings)?,
    }
    Ok(())
}

fn print_text(settings: &Settings) {
    println!("database_url: {}", settings.database_url);
    println!("api_title: {}", settings.api_title);
    println!("api_version: {}", settings.api_version);
    println!("api_description: {}", settings.api_description);
    println!("allowed_origins:");
    for origin in &settings.allowed_origins {
        println!("  {}", origin);
    }
}

fn print_env(settings: &Settings) -> Result<()> {
    println!("{}={}", ENV_DATABASE_URL, settings.database_url);
    println!("{}={}", ENV_API_TITLE, settings.api_title);
    println!("{}={}", ENV_API_VERSION, settings.api_version);
    println!("{}={}", ENV_API_DESCRIPTION, settings.api_description);
    // The list keeps the same JSON representation the loader accepts.
    println!("{}={}", ENV_ALLOWED_ORIGINS, serde_json::to_string(&settings.allowed_origins)?);
    Ok(())
}
