use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed value for {key}: expected {expected}, got {found}")]
    Malformed {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("not an existing directory: {0}")]
    InvalidDirectory(String),

    #[error("unsupported config format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    TomlDecode(#[from] toml::de::Error),

    #[error(transparent)]
    TomlEncode(#[from] toml::ser::Error),
}
