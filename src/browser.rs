/// Chrome bridge: the production implementations of the core's traits
///
/// The JS side (`bridge.js`) wraps `chrome.tabs`, `chrome.tabGroups` and
/// `chrome.storage.sync` in plain promise-returning functions; values cross
/// the boundary through serde.

use wasm_bindgen::prelude::*;

use crate::error::GroupError;
use crate::provider::TabGroups;
use crate::settings::{SettingsStore, StoredSettings};
use crate::tab_data::{GroupInfo, GroupUpdate, TabInfo};

#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabs() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn groupTabs(tab_ids: JsValue, group_id: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn updateTabGroup(group_id: i32, update: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getTabGroup(group_id: i32) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn queryTabGroups() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getSettings() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setSettings(settings: JsValue) -> Result<(), JsValue>;
}

fn host_err(context: &str, err: JsValue) -> GroupError {
    GroupError::Host(format!("{context}: {err:?}"))
}

/// `chrome.tabs` / `chrome.tabGroups` behind the [`TabGroups`] trait.
pub struct ChromeTabs;

impl TabGroups for ChromeTabs {
    async fn query_tabs(&self) -> Result<Vec<TabInfo>, GroupError> {
        let tabs = queryTabs().await.map_err(|e| host_err("queryTabs", e))?;
        serde_wasm_bindgen::from_value(tabs)
            .map_err(|e| GroupError::Host(format!("parsing tabs: {e:?}")))
    }

    async fn group(&self, tab_ids: &[i32], group_id: Option<i32>) -> Result<i32, GroupError> {
        let ids = serde_wasm_bindgen::to_value(tab_ids)
            .map_err(|e| GroupError::Host(format!("serializing tab ids: {e:?}")))?;
        let target = match group_id {
            Some(id) => JsValue::from(id),
            None => JsValue::UNDEFINED,
        };
        let new_id = groupTabs(ids, target)
            .await
            .map_err(|e| GroupError::GroupingFailed(format!("{e:?}")))?;
        serde_wasm_bindgen::from_value(new_id)
            .map_err(|e| GroupError::Host(format!("parsing group id: {e:?}")))
    }

    async fn update_group(&self, group_id: i32, update: &GroupUpdate) -> Result<(), GroupError> {
        let update = serde_wasm_bindgen::to_value(update)
            .map_err(|e| GroupError::Host(format!("serializing update: {e:?}")))?;
        updateTabGroup(group_id, update)
            .await
            .map_err(|e| GroupError::GroupingFailed(format!("{e:?}")))
    }

    async fn get_group(&self, group_id: i32) -> Result<GroupInfo, GroupError> {
        // the host rejects the promise when the group is gone
        let group = getTabGroup(group_id)
            .await
            .map_err(|_| GroupError::NotFound { group_id })?;
        serde_wasm_bindgen::from_value(group)
            .map_err(|e| GroupError::Host(format!("parsing group: {e:?}")))
    }

    async fn query_groups(&self) -> Result<Vec<GroupInfo>, GroupError> {
        let groups = queryTabGroups()
            .await
            .map_err(|e| host_err("queryTabGroups", e))?;
        serde_wasm_bindgen::from_value(groups)
            .map_err(|e| GroupError::Host(format!("parsing groups: {e:?}")))
    }
}

/// `chrome.storage.sync` behind the [`SettingsStore`] trait.
pub struct ChromeSettings;

impl SettingsStore for ChromeSettings {
    async fn load(&self) -> Result<StoredSettings, GroupError> {
        let settings = getSettings().await.map_err(|e| host_err("getSettings", e))?;
        if settings.is_null() || settings.is_undefined() {
            return Ok(StoredSettings::default());
        }
        serde_wasm_bindgen::from_value(settings)
            .map_err(|e| GroupError::Host(format!("parsing settings: {e:?}")))
    }

    async fn save(&self, settings: &StoredSettings) -> Result<(), GroupError> {
        let settings = serde_wasm_bindgen::to_value(settings)
            .map_err(|e| GroupError::Host(format!("serializing settings: {e:?}")))?;
        setSettings(settings).await.map_err(|e| host_err("setSettings", e))
    }
}
