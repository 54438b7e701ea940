use thiserror::Error;

/// Errors returned by [`crate::HubspotClient`] itself.
#[derive(Debug, Error)]
pub enum HubspotError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: usize },

    #[error("invalid base URL '{base_url}': {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

/// A failure in one of the pipeline's fetch stages.
///
/// Every message starts with the stage prefix and keeps the underlying error
/// message as its suffix.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The account details endpoint answered with a non-2xx status.
    #[error("Error while fetching HubSpot account details. Status: {status}. Body: {body}")]
    AccountDetailsStatus { status: u16, body: String },

    /// Connection failure, or the response body could not be read.
    #[error("Error while fetching HubSpot account details. {0}")]
    AccountDetails(#[source] reqwest::Error),

    #[error("Error while decoding HubSpot account details. {0}")]
    AccountDetailsDecode(#[source] serde_json::Error),

    #[error("Error while decoding HubSpot account details. Response has no portalId")]
    MissingPortalId,

    #[error("Error while fetching HubSpot contacts. {0}")]
    Contacts(#[source] Box<dyn std::error::Error + Send + Sync>),
}
