//! Provider bindings
//!
//! A binding maps a logical storage slot to a provider kind plus the
//! provider-specific settings forwarded to its factory.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Provider-specific settings, passed verbatim to the provider factory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderSettings(BTreeMap<String, Value>);

impl ProviderSettings {
    /// Create empty settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a setting
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a setting
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw value of a setting
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a setting is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Setting keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over all settings
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of settings
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no settings are present
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// String setting, `None` when absent
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(type_mismatch(key, "a string", other)),
        }
    }

    /// String setting that must be present
    pub fn require_str(&self, key: &str) -> Result<&str> {
        self.get_str(key)?
            .ok_or_else(|| Error::invalid_argument(format!("missing required setting '{}'", key)))
    }

    /// Boolean setting, `None` when absent
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(type_mismatch(key, "a boolean", other)),
        }
    }

    /// Unsigned integer setting, `None` when absent
    pub fn get_u64(&self, key: &str) -> Result<Option<u64>> {
        match self.0.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_u64()
                .map(Some)
                .ok_or_else(|| type_mismatch(key, "an unsigned integer", value)),
        }
    }
}

impl FromIterator<(String, Value)> for ProviderSettings {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn type_mismatch(key: &str, expected: &str, found: &Value) -> Error {
    Error::invalid_argument(format!(
        "setting '{}' must be {}, found {}",
        key, expected, found
    ))
}

/// Configuration entry binding a storage slot to a provider kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderBinding {
    /// Logical storage slot name
    pub slot: String,
    /// Provider kind, matched exactly against registered provider kinds
    pub kind: String,
    /// Provider-specific settings
    #[serde(default)]
    pub settings: ProviderSettings,
}

impl ProviderBinding {
    /// Create a binding without settings
    pub fn new(slot: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            slot: slot.into(),
            kind: kind.into(),
            settings: ProviderSettings::new(),
        }
    }

    /// Add a provider setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key, value);
        self
    }

    /// Replace all provider settings
    pub fn with_settings(mut self, settings: ProviderSettings) -> Self {
        self.settings = settings;
        self
    }
}
