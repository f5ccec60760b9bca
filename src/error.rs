/// Error taxonomy for grouping operations

use thiserror::Error;

/// Everything that can go wrong while deciding on or applying a grouping.
///
/// None of these are retried. Each handler catches at its boundary via
/// [`report`] and leaves tab/group state untouched for that event; the next
/// lifecycle event re-evaluates from fresh state.
#[derive(Debug, Error)]
pub enum GroupError {
    #[error("malformed url: {url}")]
    MalformedUrl { url: String },

    #[error("stale group reference: group {group_id} no longer exists")]
    StaleGroup { group_id: i32 },

    #[error("grouping rejected by the browser: {0}")]
    GroupingFailed(String),

    #[error("group {group_id} not found")]
    NotFound { group_id: i32 },

    #[error("host call failed: {0}")]
    Host(String),
}

/// Log a failed operation with the name of the handler that triggered it.
pub fn report(operation: &str, err: &GroupError) {
    log::error!("error in {operation}: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_group() {
        let err = GroupError::StaleGroup { group_id: 42 };
        assert!(err.to_string().contains("42"));

        let err = GroupError::NotFound { group_id: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_display_carries_the_url() {
        let err = GroupError::MalformedUrl {
            url: "https://".to_string(),
        };
        assert_eq!(err.to_string(), "malformed url: https://");
    }
}
