//! Action handles: discrete named events tied to a visit, no heartbeat.

/// Handle for one emitted action. Inert handles come from no-op trackers
/// and self-visit classifications; there is nothing to update behind them.
#[derive(Debug, Clone)]
pub struct ActionHandle {
    action_id: Option<String>,
}

impl ActionHandle {
    pub(crate) fn inert() -> Self {
        Self { action_id: None }
    }

    pub(crate) fn created(action_id: String) -> Self {
        Self {
            action_id: Some(action_id),
        }
    }

    /// Server-assigned action id, when an action was created.
    pub fn action_id(&self) -> Option<&str> {
        self.action_id.as_deref()
    }
}
