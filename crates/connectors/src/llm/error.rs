use thiserror::Error;

/// Errors from the language-model completion endpoint.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport-level failure (connection refused, timeout, bad URL).
    #[error("request to model endpoint failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("model endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// The response body did not carry a completion message.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}
