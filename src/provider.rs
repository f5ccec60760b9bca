/// The seam between the decision core and the host tab/group API

use crate::error::GroupError;
use crate::tab_data::{GroupInfo, GroupUpdate, TabInfo};

/// The subset of the host's tab and tab-group API the engine consumes.
///
/// Implemented over the Chrome bridge in production and by an in-memory fake
/// in tests. Query results are snapshots: a handler may act on state that is
/// already stale by the time its mutation lands, and the mutation call is the
/// only point of truth.
#[allow(async_fn_in_trait)] // single-threaded wasm target, no Send bound wanted
pub trait TabGroups {
    /// Every open tab, across all windows.
    async fn query_tabs(&self) -> Result<Vec<TabInfo>, GroupError>;

    /// Add tabs to `group_id`, or create a fresh group when `None`.
    /// Returns the id of the group the tabs ended up in. Re-adding a tab to
    /// its current group must be a harmless no-op.
    async fn group(&self, tab_ids: &[i32], group_id: Option<i32>) -> Result<i32, GroupError>;

    /// Update a group's title and/or color.
    async fn update_group(&self, group_id: i32, update: &GroupUpdate) -> Result<(), GroupError>;

    /// Fetch one group, failing with [`GroupError::NotFound`] if it is gone.
    async fn get_group(&self, group_id: i32) -> Result<GroupInfo, GroupError>;

    /// Every existing tab group.
    async fn query_groups(&self) -> Result<Vec<GroupInfo>, GroupError>;
}
