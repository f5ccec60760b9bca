/// Lifecycle signal dispatch
///
/// Maps the host's events onto engine operations. The dispatcher itself
/// decides nothing beyond which signals are worth forwarding.

use serde::Deserialize;

use crate::color::RandomSource;
use crate::engine::GroupingEngine;
use crate::provider::TabGroups;
use crate::settings::SettingsStore;
use crate::tab_data::TabInfo;

/// The slice of a tab-updated `changeInfo` payload the dispatcher reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabChange {
    pub url: Option<String>,
}

pub struct Dispatcher<P, S, R> {
    engine: GroupingEngine<P, S, R>,
}

impl<P: TabGroups, S: SettingsStore, R: RandomSource> Dispatcher<P, S, R> {
    pub fn new(engine: GroupingEngine<P, S, R>) -> Self {
        Dispatcher { engine }
    }

    /// Fired once when the extension is installed or updated.
    pub async fn installed(&mut self) {
        self.engine.install_pass().await;
    }

    /// Fired for every newly created tab.
    pub async fn tab_created(&mut self, tab: &TabInfo) {
        self.engine.handle_tab(tab).await;
    }

    /// Fired for every tab update; only URL-changing navigations matter.
    pub async fn tab_updated(&mut self, _tab_id: i32, change: &TabChange, tab: &TabInfo) {
        if change.url.is_some() {
            self.engine.handle_tab(tab).await;
        }
    }

    /// Reconcile a single tab against existing groups by hostname.
    pub async fn reconcile(&mut self, tab: &TabInfo) {
        self.engine.reconcile_tab(tab).await;
    }
}

/// Settings changes are observed, not acted on; every decision path re-reads
/// the store anyway.
pub fn settings_changed(changes: &serde_json::Value) {
    if let Some(change) = changes.get("extensionEnabled") {
        log::info!(
            "extension enabled state changed: {:?}",
            change.get("newValue")
        );
    }
    if let Some(change) = changes.get("autoMergeTabs") {
        log::info!("auto merge state changed: {:?}", change.get("newValue"));
    }
}
