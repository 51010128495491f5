//! setoran-config: environment-driven configuration for the Setoran Harian API
//!
//! Builds the single [`Settings`] record the application consumes at startup
//! by merging compiled-in defaults, an optional `.env` file, and process
//! environment variables, with environment variables taking precedence over
//! the file and the file over the defaults.
//!
//! The resolution core is pure: [`config::resolve`] works on explicit maps,
//! so alternate configurations are trivial to construct in tests.
//! [`config::load_settings`] wraps it with the actual environment and file
//! reads. All failures are [`ConfigError`] values meant to abort startup.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;

pub use config::{load_settings, EnvFile};
pub use domain::Settings;
pub use error::ConfigError;
