//! Persisted user preferences.

use crate::kernel::services::ports::settings::{Settings, SettingsPatch};
use crate::kernel::services::ports::storage::{KeyValueStorage, SETTINGS_KEY};

pub struct SettingsStore {
    settings: Settings,
    storage: Box<dyn KeyValueStorage>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.settings)
            .field("storage", &self.storage.name())
            .finish()
    }
}

impl SettingsStore {
    /// Stored fields merged over defaults. Unreadable or corrupt data yields plain defaults.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let settings = match storage.get(SETTINGS_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<Settings>(&raw).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored settings are corrupt; using defaults");
                Settings::default()
            }),
            Ok(None) => Settings::default(),
            Err(err) => {
                tracing::warn!(medium = storage.name(), error = %err, "settings unreadable");
                Settings::default()
            }
        };
        Self { settings, storage }
    }

    pub fn get(&self) -> &Settings {
        &self.settings
    }

    /// Merges `patch` and persists. Returns whether any field changed.
    pub fn set(&mut self, patch: SettingsPatch) -> bool {
        let changed = patch.apply_to(&mut self.settings);
        self.persist();
        changed
    }

    pub fn persist(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(raw) => {
                if let Err(err) = self.storage.set(SETTINGS_KEY, &raw) {
                    tracing::warn!(medium = self.storage.name(), error = %err, "failed to persist settings");
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to encode settings"),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/settings.rs"]
mod tests;
