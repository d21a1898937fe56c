//! Settings read from a JSON file

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::settings::SettingsStore;

use super::MemorySettings;

/// Settings loaded from a JSON object of string values.
///
/// Non-string values are skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JsonFileSettings {
    values: MemorySettings,
}

impl JsonFileSettings {
    /// Load the settings file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;

        debug!("loaded settings from {}", path.display());

        Self::from_json(&contents)
            .with_context(|| format!("failed to parse settings in {}", path.display()))
    }

    /// Parse settings from JSON text
    pub fn from_json(contents: &str) -> Result<Self> {
        let raw: HashMap<String, Value> = serde_json::from_str(contents)?;

        let values = raw
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(text) => Some((key, text)),
                _ => {
                    warn!(key = %key, "ignoring non-string setting");
                    None
                }
            })
            .collect::<HashMap<_, _>>();

        Ok(Self {
            values: values.into(),
        })
    }
}

impl SettingsStore for JsonFileSettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key)
    }
}
