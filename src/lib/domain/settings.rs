//! Runtime settings

#[cfg(test)]
use mockall::mock;

/// Read-only access to the host application's key-value settings
pub trait SettingsStore: Send + Sync {
    /// The value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;
}

#[cfg(test)]
mock! {
    pub SettingsStore {}

    impl SettingsStore for SettingsStore {
        fn get(&self, key: &str) -> Option<String>;
    }
}

#[cfg(test)]
pub mod tests {
    pub use super::MockSettingsStore;
}
