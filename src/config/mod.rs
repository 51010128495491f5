//! Configuration loading and merging
//!
//! Resolves settings from process environment variables, an optional `.env`
//! file, and compiled-in defaults with proper precedence
//! (Env > File > Defaults).

pub mod loader;

pub use loader::{load_settings, resolve, EnvFile, DEFAULT_ENV_FILE};
