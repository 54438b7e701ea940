use thiserror::Error;

/// Errors returned by [`crate::SlackClient`] itself.
#[derive(Debug, Error)]
pub enum SlackError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Slack answered `{"ok": false, "error": "<code>"}`.
    #[error("An API error occurred: {0}")]
    Api(String),

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// Posting the report failed. Wraps whatever the chat collaborator failed with.
#[derive(Debug, Error)]
#[error("Error while sending report to Slack. {0}")]
pub struct DispatchError(#[source] pub Box<dyn std::error::Error + Send + Sync>);
