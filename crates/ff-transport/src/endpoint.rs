//! Endpoint URL construction.

/// Path of the GraphQL endpoint, appended to the configured server root.
const ENDPOINT_PATH: &str = "api";

/// Joins the server root and the endpoint path with exactly one slash,
/// whether or not the configured root carries a trailing one.
pub fn endpoint_url(server: &str) -> String {
    if server.ends_with('/') {
        format!("{server}{ENDPOINT_PATH}")
    } else {
        format!("{server}/{ENDPOINT_PATH}")
    }
}
