//! ff-core: record/action lifecycle engine for the footfall tracker.
//!
//! A [`Tracker`] is bound to one server and option set. [`Tracker::record`]
//! registers a visit record and keeps its duration alive with periodic
//! heartbeat updates until the returned handle is stopped or a newer
//! `record` call supersedes it. [`Tracker::action`] emits discrete named
//! events against the same service, without heartbeats.
//!
//! Visitor filtering (localhost origins, bot user agents, server-flagged
//! self-visits, backgrounded tabs) is applied as early as possible so
//! excluded traffic costs no round trips.

pub mod action;
pub mod attrs;
pub mod filter;
pub mod instance;
pub mod session;

pub use action::ActionHandle;
pub use attrs::attributes;
pub use ff_config::Options;
pub use ff_transport::TransportError;
pub use instance::{create, Tracker};
pub use session::RecordHandle;
