use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use toml::value::Datetime;

use crate::errors::ConfigError;

/// Generic persisted mapping owned by the host project file.
pub type ConfigMap = BTreeMap<String, Value>;

/// A scalar (or nested) value stored under a project-file key.
///
/// Variant order matters: integers past `i64::MAX` land in `Unsigned` and TOML
/// datetimes are tried before plain tables, so foreign keys are written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    String(String),
    Datetime(Datetime),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) | Value::Unsigned(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Datetime(_) => "datetime",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(value) => Some(value),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Toml,
}

impl StoreFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(StoreFormat::Json),
            Some("toml") => Ok(StoreFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

pub fn parse_document<T: DeserializeOwned>(
    contents: &str,
    format: StoreFormat,
) -> Result<T, ConfigError> {
    match format {
        StoreFormat::Json => Ok(serde_json::from_str(contents)?),
        StoreFormat::Toml => Ok(toml::from_str(contents)?),
    }
}

pub fn render_document<T: Serialize>(value: &T, format: StoreFormat) -> Result<String, ConfigError> {
    match format {
        StoreFormat::Json => {
            let mut text = serde_json::to_string_pretty(value)?;
            text.push('\n');
            Ok(text)
        }
        StoreFormat::Toml => Ok(toml::to_string_pretty(value)?),
    }
}

pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let format = StoreFormat::from_path(path)?;
    let contents = fs::read_to_string(path)?;
    parse_document(&contents, format)
}

pub fn save_document<T: Serialize>(path: &Path, value: &T) -> Result<(), ConfigError> {
    let format = StoreFormat::from_path(path)?;
    let text = render_document(value, format)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)?;
    Ok(())
}

pub fn read_map(path: &Path) -> Result<ConfigMap, ConfigError> {
    load_document(path)
}

pub fn write_map(path: &Path, map: &ConfigMap) -> Result<(), ConfigError> {
    save_document(path, map)
}
