use thiserror::Error;

/// Classification of a single request/response exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a usable response.
    #[error("network: {0}")]
    Network(String),
    /// The service answered with a status other than 200.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("parse: {0}")]
    Parse(String),
    /// Well-formed response carrying an application-level `errors` array.
    #[error("api: {0}")]
    Api(String),
}
