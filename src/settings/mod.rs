//! Key-value persistence for editor state.
//!
//! [`SettingsStore`] is the seam between the options model and whatever backend
//! keeps the values: [`MemorySettings`] for tests and scratch use, and
//! [`JsonSettingsFile`] for a JSON document in the user's config directory.

mod json_file;

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Size;

pub use json_file::{default_settings_path, JsonSettingsFile};

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read settings: {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write settings: {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse settings")]
    Parse(#[from] serde_json::Error),
}

/// A single stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SettingValue {
    Size(Size),
    Bool(bool),
    Int(i64),
    Text(String),
}

impl SettingValue {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Size(_) => "size",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }
}

impl From<Size> for SettingValue {
    fn from(value: Size) -> Self {
        Self::Size(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for SettingValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Flat key-value namespace the editor state is saved to and loaded from.
///
/// The typed readers return `default` when the key is absent, and also when the
/// stored value has another type (logged as a warning).
pub trait SettingsStore {
    fn value(&self, key: &str) -> Option<SettingValue>;
    fn set_value(&mut self, key: &str, value: SettingValue);

    fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    fn size_or(&self, key: &str, default: Size) -> Size {
        match self.value(key) {
            Some(SettingValue::Size(size)) => size,
            other => fallback(key, other, default),
        }
    }

    fn bool_or(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(SettingValue::Bool(value)) => value,
            Some(SettingValue::Int(value)) => value != 0,
            other => fallback(key, other, default),
        }
    }

    fn int_or(&self, key: &str, default: i64) -> i64 {
        match self.value(key) {
            Some(SettingValue::Int(value)) => value,
            Some(SettingValue::Text(text)) => match text.trim().parse() {
                Ok(value) => value,
                Err(_) => fallback(key, Some(SettingValue::Text(text)), default),
            },
            other => fallback(key, other, default),
        }
    }

    fn text_or(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(SettingValue::Text(text)) => text,
            other => fallback(key, other, default.to_string()),
        }
    }
}

fn fallback<T>(key: &str, stored: Option<SettingValue>, default: T) -> T {
    if let Some(stored) = stored {
        tracing::warn!(
            key,
            kind = stored.kind(),
            "stored setting has unexpected type; using default"
        );
    }
    default
}

/// In-memory store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: BTreeMap<String, SettingValue>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }

    pub(crate) fn from_map(values: BTreeMap<String, SettingValue>) -> Self {
        Self { values }
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<String, SettingValue> {
        &self.values
    }
}

impl SettingsStore for MemorySettings {
    fn value(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
    }
}
