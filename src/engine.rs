/// Grouping policy engine
///
/// All decision logic lives here: the install-time bulk pass, the per-tab
/// incremental pass, the merge/create step and the single-tab late-join.
/// Every mutation goes through the injected [`TabGroups`] provider, so the
/// whole module tests against an in-memory fake.

use std::collections::HashMap;

use crate::color::{color_for, RandomSource};
use crate::error::{report, GroupError};
use crate::provider::TabGroups;
use crate::settings::SettingsStore;
use crate::site::{is_eligible, site_label, site_name, to_sentence_case};
use crate::tab_data::{GroupUpdate, TabInfo};

/// Tabs only cluster once more than this many share a site in one window.
const GROUPING_THRESHOLD: usize = 2;

pub struct GroupingEngine<P, S, R> {
    provider: P,
    settings: S,
    rng: R,
}

impl<P: TabGroups, S: SettingsStore, R: RandomSource> GroupingEngine<P, S, R> {
    pub fn new(provider: P, settings: S, rng: R) -> Self {
        GroupingEngine {
            provider,
            settings,
            rng,
        }
    }

    /// Install-time entry point: seed missing settings, then bulk-group every
    /// qualifying site partition across all windows.
    pub async fn install_pass(&mut self) {
        if let Err(err) = self.try_install().await {
            report("install_pass", &err);
        }
    }

    async fn try_install(&mut self) -> Result<(), GroupError> {
        let stored = self.settings.load().await?;
        if stored.needs_seeding() {
            self.settings.save(&stored.seeded()).await?;
        }
        if stored.auto_merge() {
            self.bulk_pass().await?;
        }
        Ok(())
    }

    /// Partition all open tabs by site identity, window boundaries ignored,
    /// and merge/create for every partition above the threshold.
    async fn bulk_pass(&mut self) -> Result<(), GroupError> {
        let tabs = self.provider.query_tabs().await?;

        let mut partitions: HashMap<String, Vec<TabInfo>> = HashMap::new();
        for tab in tabs {
            if !is_eligible(&tab.url) {
                continue;
            }
            let Ok(identity) = site_label(&tab.url) else {
                log::debug!("skipping unparseable url: {}", tab.url);
                continue;
            };
            partitions.entry(identity).or_default().push(tab);
        }

        for (identity, members) in partitions {
            if members.len() > GROUPING_THRESHOLD {
                // one failed partition must not starve the rest
                if let Err(err) = self.merge_or_create(&members, &identity).await {
                    report("bulk_pass", &err);
                }
            }
        }
        Ok(())
    }

    /// Incremental entry point, fired per tab creation or URL-changing
    /// navigation. Failures are reported here and the event is dropped; the
    /// next event re-evaluates from fresh state.
    pub async fn handle_tab(&mut self, tab: &TabInfo) {
        if !is_eligible(&tab.url) {
            return;
        }
        if let Err(err) = self.try_handle_tab(tab).await {
            report("handle_tab", &err);
        }
    }

    async fn try_handle_tab(&mut self, tab: &TabInfo) -> Result<(), GroupError> {
        let identity = site_label(&tab.url)?;

        if !self.settings.load().await?.is_enabled() {
            return Ok(());
        }

        let tabs = self.provider.query_tabs().await?;
        let same_window: Vec<TabInfo> = tabs
            .into_iter()
            .filter(|t| is_eligible(&t.url))
            .filter(|t| site_label(&t.url).is_ok_and(|label| label == identity))
            .filter(|t| t.window_id == tab.window_id)
            .collect();

        if same_window.len() > GROUPING_THRESHOLD {
            // flags may have flipped since the handler started
            if self.settings.load().await?.auto_merge() {
                self.merge_or_create(&same_window, &identity).await?;
            }
        }
        Ok(())
    }

    /// Fold one identity's qualifying tabs into a group: the first already
    /// grouped tab anchors the merge, otherwise a new titled, colored group
    /// is created.
    async fn merge_or_create(
        &mut self,
        tabs: &[TabInfo],
        identity: &str,
    ) -> Result<(), GroupError> {
        let tab_ids: Vec<i32> = tabs.iter().map(|t| t.id).collect();

        if let Some(anchor) = tabs.iter().find(|t| t.is_grouped()) {
            // the anchor group may have been closed since the query
            match self.provider.get_group(anchor.group_id).await {
                Ok(_) => {}
                Err(GroupError::NotFound { group_id }) => {
                    return Err(GroupError::StaleGroup { group_id });
                }
                Err(err) => return Err(err),
            }
            self.provider.group(&tab_ids, Some(anchor.group_id)).await?;
        } else {
            let group_id = self.provider.group(&tab_ids, None).await?;
            let update = GroupUpdate {
                title: Some(to_sentence_case(identity)),
                color: Some(color_for(identity, &mut self.rng)),
            };
            self.provider.update_group(group_id, &update).await?;
        }
        Ok(())
    }

    /// Late-join entry point: reconcile one tab against existing groups by
    /// full hostname instead of against its sibling set.
    ///
    /// Note the identity here is [`site_name`], not [`site_label`]: group
    /// titles are matched as full text, so `docs.example.com` only joins a
    /// group literally titled that way.
    pub async fn reconcile_tab(&mut self, tab: &TabInfo) {
        if !is_eligible(&tab.url) {
            return;
        }
        if let Err(err) = self.try_reconcile(tab).await {
            report("reconcile_tab", &err);
        }
    }

    async fn try_reconcile(&mut self, tab: &TabInfo) -> Result<(), GroupError> {
        if !self.settings.load().await?.auto_merge() {
            return Ok(());
        }
        let name = site_name(&tab.url)?;
        let wanted = name.to_lowercase();

        let groups = self.provider.query_groups().await?;
        match groups.iter().find(|g| g.title.to_lowercase() == wanted) {
            Some(group) => {
                self.provider.group(&[tab.id], Some(group.id)).await?;
            }
            None => {
                let group_id = self.provider.group(&[tab.id], None).await?;
                let update = GroupUpdate {
                    title: Some(name),
                    color: None,
                };
                self.provider.update_group(group_id, &update).await?;
            }
        }
        Ok(())
    }
}
