/// Data structures for Tab Shepherd
use serde::{Deserialize, Serialize};

use crate::color::GroupColor;

/// Sentinel group id for a tab that belongs to no group.
pub const TAB_GROUP_ID_NONE: i32 = -1;

/// The slice of a browser tab the grouping engine cares about.
///
/// Mirrors the host's camelCase tab object; the engine never creates tabs,
/// it only reads them and reassigns their group membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    pub window_id: i32,
    #[serde(default = "group_id_none")]
    pub group_id: i32,
}

fn group_id_none() -> i32 {
    TAB_GROUP_ID_NONE
}

impl TabInfo {
    pub fn new(id: i32, url: impl Into<String>, window_id: i32, group_id: i32) -> TabInfo {
        TabInfo {
            id,
            url: url.into(),
            window_id,
            group_id,
        }
    }

    /// Whether this tab already belongs to a real group.
    pub fn is_grouped(&self) -> bool {
        self.group_id != TAB_GROUP_ID_NONE
    }
}

/// An existing tab group as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub id: i32,
    #[serde(default)]
    pub title: String,
    pub color: GroupColor,
}

/// A partial update to a group's presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<GroupColor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_info_creation() {
        let tab = TabInfo::new(1, "https://example.com", 100, TAB_GROUP_ID_NONE);

        assert_eq!(tab.id, 1);
        assert_eq!(tab.url, "https://example.com");
        assert_eq!(tab.window_id, 100);
        assert!(!tab.is_grouped());

        let grouped = TabInfo::new(2, "https://example.com/a", 100, 7);
        assert!(grouped.is_grouped());
    }

    #[test]
    fn test_tab_deserializes_from_chrome_shape() {
        // The host omits url for discarded tabs and uses -1 for ungrouped
        let tab: TabInfo =
            serde_json::from_str(r#"{"id":5,"windowId":2,"groupId":-1}"#).unwrap();
        assert_eq!(tab.id, 5);
        assert_eq!(tab.url, "");
        assert!(!tab.is_grouped());

        let tab: TabInfo = serde_json::from_str(
            r#"{"id":6,"url":"https://a.com","windowId":2,"groupId":9,"pinned":true}"#,
        )
        .unwrap();
        assert_eq!(tab.group_id, 9);
    }

    #[test]
    fn test_group_info_round_trip() {
        let group = GroupInfo {
            id: 3,
            title: "Example".to_string(),
            color: GroupColor::Orange,
        };

        let json = serde_json::to_string(&group).unwrap();
        let back: GroupInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, group);
    }

    #[test]
    fn test_group_update_skips_absent_fields() {
        let update = GroupUpdate {
            title: Some("Example".to_string()),
            color: None,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"title":"Example"}"#
        );
    }
}
