//! Environment probe port: what the hosting context knows about the visit.

use serde_json::Value;

/// Read-only view of the hosting environment. Implementations are injected
/// by the application layer (process environment) or by tests (static
/// stubs).
pub trait VisitEnvironment: Send + Sync {
    /// Hostname of the page origin (empty when unknown).
    fn hostname(&self) -> String;

    /// User agent of the visitor (empty when unknown).
    fn user_agent(&self) -> String;

    /// Whether the visit tab is currently backgrounded. Probed live at each
    /// heartbeat tick, never cached.
    fn tab_hidden(&self) -> bool;

    /// Raw attribute value by wire key (`siteLocation`, `screenWidth`, ...).
    /// `None` when the environment has nothing for the key.
    fn page_value(&self, key: &str) -> Option<Value>;
}
