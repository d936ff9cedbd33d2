//! Record sessions: one visit record kept alive by periodic heartbeats.
//!
//! The service infers visit end from a gap in updates, not from an explicit
//! close signal, so a session never sends a teardown request: the loop
//! simply stops ticking. Cancellation is cooperative — flags are read at
//! tick boundaries, and an update already in flight is allowed to complete
//! and be ignored.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use ff_transport::{wire, GraphqlClient};
use ff_types::ports::env::VisitEnvironment;

/// What a single heartbeat tick decided to do, in policy order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A newer session owns the instance; this loop must end.
    Superseded,
    /// The handle was stopped explicitly; this loop must end.
    Stopped,
    /// The tab is backgrounded; skip this tick, keep the loop armed.
    Skipped,
    /// Send an update for the record.
    Send,
}

/// Pure tick decision, so the policy order is testable without timers.
pub fn tick_outcome(current: u64, generation: u64, stopped: bool, hidden: bool) -> TickOutcome {
    if generation != current {
        return TickOutcome::Superseded;
    }
    if stopped {
        return TickOutcome::Stopped;
    }
    if hidden {
        return TickOutcome::Skipped;
    }
    TickOutcome::Send
}

/// Handle for one visit record.
///
/// Dropping the handle does NOT stop the heartbeat; call
/// [`RecordHandle::stop`], or let a newer `record` call supersede the
/// session.
#[derive(Debug, Clone)]
pub struct RecordHandle {
    record_id: Option<String>,
    stopped: Arc<AtomicBool>,
}

impl RecordHandle {
    /// Handle with no record behind it (no-op tracker, failed gate).
    pub(crate) fn inert() -> Self {
        Self {
            record_id: None,
            stopped: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Handle carrying a server id that must never be updated (self-visit).
    pub(crate) fn suppressed(record_id: String) -> Self {
        Self {
            record_id: Some(record_id),
            stopped: Arc::new(AtomicBool::new(true)),
        }
    }

    pub(crate) fn active(record_id: String) -> Self {
        Self {
            record_id: Some(record_id),
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Server-assigned record id, when a record was created.
    pub fn record_id(&self) -> Option<&str> {
        self.record_id.as_deref()
    }

    /// Cooperative stop: the heartbeat loop observes the flag at its next
    /// tick. Idempotent — repeated calls have no further effect.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// Whether the session was stopped (or never started).
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    pub(crate) fn stop_flag(&self) -> Arc<AtomicBool> {
        self.stopped.clone()
    }
}

/// Spawns the heartbeat loop for the handle's record under `generation`.
/// The loop self-terminates when the instance generation moves past it or
/// the handle is stopped; a hidden tab skips ticks without disarming.
pub(crate) fn arm_heartbeat(
    client: GraphqlClient,
    env: Arc<dyn VisitEnvironment>,
    current: Arc<AtomicU64>,
    generation: u64,
    handle: &RecordHandle,
) {
    let record_id = match handle.record_id() {
        Some(id) => id.to_owned(),
        None => return,
    };
    let stopped = handle.stop_flag();
    let interval = Duration::from_millis(ff_config::tunables::heartbeat_interval_ms());

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let outcome = tick_outcome(
                current.load(Ordering::Relaxed),
                generation,
                stopped.load(Ordering::Relaxed),
                env.tab_hidden(),
            );

            match outcome {
                TickOutcome::Superseded => {
                    tracing::debug!(record_id = %record_id, generation, "heartbeat loop superseded");
                    #[cfg(feature = "metrics")]
                    {
                        metrics::counter!("visit_heartbeat_total", "result" => "superseded")
                            .increment(1);
                    }
                    break;
                }
                TickOutcome::Stopped => {
                    tracing::debug!(record_id = %record_id, "heartbeat loop stopped");
                    break;
                }
                TickOutcome::Skipped => {
                    tracing::trace!(record_id = %record_id, "tab hidden, heartbeat skipped");
                    #[cfg(feature = "metrics")]
                    {
                        metrics::counter!("visit_heartbeat_total", "result" => "skipped")
                            .increment(1);
                    }
                }
                TickOutcome::Send => {
                    client.post_forget(&wire::update_record(&record_id)).await;
                    #[cfg(feature = "metrics")]
                    {
                        metrics::counter!("visit_heartbeat_total", "result" => "sent").increment(1);
                    }
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_policy_order() {
        // Supersession wins over everything else.
        assert_eq!(tick_outcome(2, 1, true, true), TickOutcome::Superseded);
        assert_eq!(tick_outcome(2, 1, false, false), TickOutcome::Superseded);
        // Then the stop flag.
        assert_eq!(tick_outcome(1, 1, true, true), TickOutcome::Stopped);
        // A hidden tab only skips.
        assert_eq!(tick_outcome(1, 1, false, true), TickOutcome::Skipped);
        // Otherwise send.
        assert_eq!(tick_outcome(1, 1, false, false), TickOutcome::Send);
    }

    #[test]
    fn stop_is_idempotent() {
        let handle = RecordHandle::active("rec-1".to_owned());
        assert!(!handle.is_stopped());
        handle.stop();
        assert!(handle.is_stopped());
        handle.stop();
        assert!(handle.is_stopped());
    }

    #[test]
    fn inert_handles_are_born_stopped() {
        assert!(RecordHandle::inert().is_stopped());
        assert!(RecordHandle::inert().record_id().is_none());

        let suppressed = RecordHandle::suppressed("id".to_owned());
        assert!(suppressed.is_stopped());
        assert_eq!(suppressed.record_id(), Some("id"));
    }
}
