/// Tab Shepherd - Chrome Extension that clusters tabs into site groups
/// Built with Rust + WASM

pub mod browser;
pub mod color;
pub mod engine;
pub mod error;
pub mod events;
pub mod provider;
pub mod settings;
pub mod site;
pub mod tab_data;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use browser::{ChromeSettings, ChromeTabs};
use color::OsRandom;
use engine::GroupingEngine;
use events::{Dispatcher, TabChange};
use tab_data::TabInfo;

// Set up panic hook and logging for the background service worker
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

fn dispatcher() -> Dispatcher<ChromeTabs, ChromeSettings, OsRandom> {
    Dispatcher::new(GroupingEngine::new(ChromeTabs, ChromeSettings, OsRandom))
}

fn parse_tab(tab: JsValue, context: &str) -> Option<TabInfo> {
    match serde_wasm_bindgen::from_value(tab) {
        Ok(tab) => Some(tab),
        Err(err) => {
            log::error!("error in {context}: unreadable tab object: {err:?}");
            None
        }
    }
}

/// Install/update event: seed settings and bulk-group existing tabs.
#[wasm_bindgen]
pub fn on_installed() {
    spawn_local(async move {
        dispatcher().installed().await;
    });
}

/// Tab-created event.
#[wasm_bindgen]
pub fn on_tab_created(tab: JsValue) {
    let Some(tab) = parse_tab(tab, "on_tab_created") else {
        return;
    };
    spawn_local(async move {
        dispatcher().tab_created(&tab).await;
    });
}

/// Tab-updated event; forwarded only when the navigation changed the URL.
#[wasm_bindgen]
pub fn on_tab_updated(tab_id: i32, change_info: JsValue, tab: JsValue) {
    let change: TabChange = match serde_wasm_bindgen::from_value(change_info) {
        Ok(change) => change,
        Err(err) => {
            log::error!("error in on_tab_updated: unreadable changeInfo: {err:?}");
            return;
        }
    };
    let Some(tab) = parse_tab(tab, "on_tab_updated") else {
        return;
    };
    spawn_local(async move {
        dispatcher().tab_updated(tab_id, &change, &tab).await;
    });
}

/// Storage-change event; observability only.
#[wasm_bindgen]
pub fn on_settings_changed(changes: JsValue) {
    web_sys::console::log_1(&changes);
    match serde_wasm_bindgen::from_value::<serde_json::Value>(changes) {
        Ok(changes) => events::settings_changed(&changes),
        Err(err) => log::error!("error in on_settings_changed: {err:?}"),
    }
}

/// Reconcile one tab against existing groups by hostname.
#[wasm_bindgen]
pub fn reconcile_tab(tab: JsValue) {
    let Some(tab) = parse_tab(tab, "reconcile_tab") else {
        return;
    };
    spawn_local(async move {
        dispatcher().reconcile(&tab).await;
    });
}

// Re-export the grouping identity for JavaScript access
#[wasm_bindgen]
pub fn site_identity(url: &str) -> String {
    site::site_label(url).unwrap_or_else(|_| "invalid".to_string())
}
