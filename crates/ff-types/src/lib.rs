//! ff-types: cross-crate stable contracts (attribute payloads, ports).

pub mod ports;

use thiserror::Error;

/// Opaque visit attributes: a flat string-keyed map of JSON primitives,
/// passed through to the tracking service uninterpreted.
pub type Attributes = serde_json::Map<String, serde_json::Value>;

/// Error surface of port implementations. Classification of wire-level
/// outcomes (status codes, parse failures, application errors) happens
/// above the port, in ff-transport.
#[derive(Debug, Clone, Error)]
pub enum PortError {
    #[error("io: {0}")]
    Io(String),
}
