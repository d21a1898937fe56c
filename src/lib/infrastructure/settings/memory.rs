//! In-memory settings

use std::collections::HashMap;

use crate::domain::settings::SettingsStore;

/// Settings held in memory
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    /// Add a value
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.values.insert(key.to_string(), value.to_string());
        self
    }
}

impl From<HashMap<String, String>> for MemorySettings {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_value() {
        let settings = MemorySettings::default().with("smtp_uri", "smtp://mail.local");

        assert_eq!(settings.get("smtp_uri"), Some("smtp://mail.local".to_string()));
        assert_eq!(settings.get("admin_email"), None);
    }
}
