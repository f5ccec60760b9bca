/// Feature flags persisted in the host's sync storage

use serde::{Deserialize, Serialize};

use crate::error::GroupError;

/// The two boolean flags the engine consults, as stored.
///
/// `None` means the key was never written; both flags read as enabled until
/// the user flips them. Field names follow the storage keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_merge_tabs: Option<bool>,
}

impl StoredSettings {
    pub fn is_enabled(&self) -> bool {
        self.extension_enabled.unwrap_or(true)
    }

    pub fn auto_merge(&self) -> bool {
        self.auto_merge_tabs.unwrap_or(true)
    }

    /// First-run view: every absent flag filled with its default.
    pub fn seeded(&self) -> StoredSettings {
        StoredSettings {
            extension_enabled: Some(self.extension_enabled.unwrap_or(true)),
            auto_merge_tabs: Some(self.auto_merge_tabs.unwrap_or(true)),
        }
    }

    /// Whether install still needs to write defaults back.
    pub fn needs_seeding(&self) -> bool {
        self.extension_enabled.is_none() || self.auto_merge_tabs.is_none()
    }
}

/// Async gateway to the persisted flags.
///
/// Re-fetched at every decision point rather than cached, so a settings flip
/// takes effect on the very next event.
#[allow(async_fn_in_trait)] // single-threaded wasm target, no Send bound wanted
pub trait SettingsStore {
    async fn load(&self) -> Result<StoredSettings, GroupError>;
    async fn save(&self, settings: &StoredSettings) -> Result<(), GroupError>;
}
