//! Settings resolution
//!
//! The pure core ([`resolve`], [`EnvFile::parse`]) works on explicit maps and
//! never touches process state, so precedence and coercion are unit-testable
//! without real environment variables. [`load_settings`] is the I/O shell
//! that snapshots the process environment and reads the env file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{self, Settings};
use crate::error::ConfigError;

pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_API_TITLE: &str = "API_TITLE";
pub const ENV_API_VERSION: &str = "API_VERSION";
pub const ENV_API_DESCRIPTION: &str = "API_DESCRIPTION";
pub const ENV_ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";

/// Conventional env file location, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Parsed contents of a dotenv-dialect environment file.
///
/// Parsing goes through dotenvy's iterator API so the process environment is
/// never mutated; the entries only participate in [`resolve`].
#[derive(Debug, Clone, Default)]
pub struct EnvFile {
    entries: BTreeMap<String, String>,
}

impl EnvFile {
    /// Parse `KEY=VALUE` lines (comments and blank lines allowed). A line
    /// that is not valid dotenv syntax is a [`ConfigError::MalformedValue`]
    /// attributed to its line number.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut entries = BTreeMap::new();
        for item in dotenvy::from_read_iter(content.as_bytes()) {
            let (key, value) = item.map_err(|err| match err {
                dotenvy::Error::LineParse(line, n) => ConfigError::MalformedValue {
                    key: format!("env file line {n}"),
                    reason: format!("invalid KEY=VALUE syntax in {line:?}"),
                },
                other => ConfigError::MalformedValue {
                    key: "env file".to_string(),
                    reason: other.to_string(),
                },
            })?;
            entries.insert(key, value);
        }
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve a [`Settings`] value from an explicit environment snapshot and a
/// parsed env file. Precedence per field: environment variable, then file
/// entry, then compiled-in default. Always returns a fully populated record.
pub fn resolve(env: &BTreeMap<String, String>, file: &EnvFile) -> Result<Settings, ConfigError> {
    let lookup = |key: &str| env.get(key).map(String::as_str).or_else(|| file.get(key));

    let string_field = |key: &str, default: fn() -> String| {
        lookup(key).map(str::to_owned).unwrap_or_else(default)
    };

    let allowed_origins = match lookup(ENV_ALLOWED_ORIGINS) {
        Some(raw) => parse_origins(raw)?,
        None => domain::default_allowed_origins(),
    };

    Ok(Settings {
        database_url: string_field(ENV_DATABASE_URL, domain::default_database_url),
        api_title: string_field(ENV_API_TITLE, domain::default_api_title),
        api_version: string_field(ENV_API_VERSION, domain::default_api_version),
        api_description: string_field(ENV_API_DESCRIPTION, domain::default_api_description),
        allowed_origins,
    })
}

/// Load settings from the process environment and an env file.
///
/// With `env_file = None` the conventional `./.env` is consulted and silently
/// skipped when absent. An explicitly given path must be readable.
pub fn load_settings(env_file: Option<&Path>) -> Result<Settings, ConfigError> {
    let env: BTreeMap<String, String> = std::env::vars().collect();
    let file = match env_file {
        Some(path) => read_env_file(path, true)?,
        None => read_env_file(Path::new(DEFAULT_ENV_FILE), false)?,
    };
    if !file.is_empty() {
        tracing::debug!("loaded env file overrides");
    }
    resolve(&env, &file)
}

fn read_env_file(path: &Path, explicit: bool) -> Result<EnvFile, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => EnvFile::parse(&content),
        Err(err) if !explicit && err.kind() == ErrorKind::NotFound => {
            tracing::debug!("no {} file, using process environment and defaults", path.display());
            Ok(EnvFile::default())
        }
        Err(err) => Err(ConfigError::UnreadableEnvFile { path: path.to_path_buf(), source: err }),
    }
}

fn parse_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    serde_json::from_str::<Vec<String>>(raw).map_err(|err| ConfigError::MalformedValue {
        key: ENV_ALLOWED_ORIGINS.to_string(),
        reason: format!("expected a JSON array of origin strings: {err}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn env_of(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_no_sources() {
        let settings = resolve(&BTreeMap::new(), &EnvFile::default()).expect("settings");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_env_var_wins_over_file_entry() {
        let env = env_of(&[(ENV_DATABASE_URL, "postgresql://env:env@db:5432/env")]);
        let file =
            EnvFile::parse("DATABASE_URL=postgresql://file:file@db:5432/file\n").expect("file");

        let settings = resolve(&env, &file).expect("settings");
        assert_eq!(settings.database_url, "postgresql://env:env@db:5432/env");
    }

    #[test]
    fn test_file_entry_used_when_env_var_absent() {
        let file = EnvFile::parse("API_TITLE=\"Setoran Harian Staging\"\n").expect("file");

        let settings = resolve(&BTreeMap::new(), &file).expect("settings");
        assert_eq!(settings.api_title, "Setoran Harian Staging");
        // Untouched fields keep their defaults.
        assert_eq!(settings.api_version, "1.0.0");
    }

    #[test]
    fn test_allowed_origins_list_preserves_order() {
        let env = env_of(&[(
            ENV_ALLOWED_ORIGINS,
            r#"["https://app.example.com", "https://admin.example.com"]"#,
        )]);

        let settings = resolve(&env, &EnvFile::default()).expect("settings");
        assert_eq!(
            settings.allowed_origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );
    }

    #[test]
    fn test_malformed_allowed_origins_is_error() {
        let env = env_of(&[(ENV_ALLOWED_ORIGINS, "http://localhost:5000")]);

        let err = resolve(&env, &EnvFile::default()).expect_err("must fail");
        match err {
            ConfigError::MalformedValue { key, .. } => assert_eq!(key, ENV_ALLOWED_ORIGINS),
            other => panic!("expected MalformedValue, got {other:?}"),
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let env = env_of(&[(ENV_API_VERSION, "2.0.0")]);
        let file = EnvFile::parse("API_TITLE=Again\n").expect("file");

        let first = resolve(&env, &file).expect("first");
        let second = resolve(&env, &file).expect("second");
        assert_eq!(first, second);
    }

    // Typical deployment: only the database URL is overridden.
    #[test]
    fn test_database_url_override_leaves_rest_default() {
        let env = env_of(&[(ENV_DATABASE_URL, "postgresql://u:p@db:5432/app")]);

        let settings = resolve(&env, &EnvFile::default()).expect("settings");
        assert_eq!(settings.database_url, "postgresql://u:p@db:5432/app");
        assert_eq!(settings.api_title, "Setoran Harian API");
        assert_eq!(
            settings.allowed_origins,
            vec!["http://localhost:5000", "http://localhost:3000"]
        );
    }

    #[test]
    fn test_env_file_parse_skips_comments_and_blanks() {
        let file = EnvFile::parse("# staging overrides\n\nAPI_VERSION=1.1.0\n").expect("file");
        assert_eq!(file.get("API_VERSION"), Some("1.1.0"));
        assert_eq!(file.get("API_TITLE"), None);
    }

    #[test]
    fn test_env_file_bad_line_is_malformed_value() {
        let err = EnvFile::parse("NOT A VALID LINE\n").expect_err("must fail");
        assert!(matches!(err, ConfigError::MalformedValue { .. }));
    }

    #[test]
    fn test_missing_conventional_env_file_is_skipped() {
        let tmp = TempDir::new().expect("tmp");
        let file = read_env_file(&tmp.path().join(".env"), false).expect("skip");
        assert!(file.is_empty());
    }

    #[test]
    fn test_missing_explicit_env_file_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let err = read_env_file(&tmp.path().join("missing.env"), true).expect_err("must fail");
        assert!(matches!(err, ConfigError::UnreadableEnvFile { .. }));
    }

    #[test]
    fn test_explicit_env_file_is_read() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("staging.env");
        fs::write(&path, "API_DESCRIPTION=\"Deskripsi staging\"\n").expect("write");

        let file = read_env_file(&path, true).expect("file");
        let settings = resolve(&BTreeMap::new(), &file).expect("settings");
        assert_eq!(settings.api_description, "Deskripsi staging");
    }
}
