//! Configuration error taxonomy
//!
//! Every variant is fatal at startup: errors propagate to the binary entry
//! point and abort with a message naming the offending key or path.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A supplied environment or file value cannot be coerced to its
    /// declared type.
    #[error("malformed value for {key}: {reason}")]
    MalformedValue { key: String, reason: String },

    /// An explicitly configured env file exists in configuration but cannot
    /// be opened. The conventional `./.env` is exempt only when absent.
    #[error("cannot read env file {path}: {source}")]
    UnreadableEnvFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
