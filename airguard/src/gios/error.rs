//! Transport error types.

/// Errors from fetching data from the monitoring API.
///
/// Pipeline steps treat every variant as "no data"; the variants exist for
/// callers that want to tell the causes apart.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network unreachable, connection reset, ...)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with something other than 200 OK
    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the JSON shape we expected
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
