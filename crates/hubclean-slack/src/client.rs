//! HTTP client for the Slack Web API.

use std::time::Duration;

use hubclean_core::AppConfig;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::error::SlackError;

/// Client for `chat.postMessage`, authenticated with a bot token.
pub struct SlackClient {
    client: Client,
    access_token: String,
    post_message_url: Url,
}

#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    blocks: &'a [Block],
}

/// Slack reports API failures in the body, usually with HTTP 200.
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

impl SlackClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`SlackClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, SlackError> {
        Self::with_base_url(
            &config.slack_access_token,
            config.request_timeout_secs,
            &config.user_agent,
            &config.slack_base_url,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`SlackError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`SlackError::InvalidBaseUrl`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, SlackError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let post_message_url = Url::parse(&normalised)
            .and_then(|base| base.join("chat.postMessage"))
            .map_err(|e| SlackError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            post_message_url,
        })
    }

    /// Posts a message with rich `blocks` and a plain `text` fallback.
    ///
    /// # Errors
    ///
    /// - [`SlackError::Http`] on network failure.
    /// - [`SlackError::UnexpectedStatus`] on a non-2xx status.
    /// - [`SlackError::Api`] when Slack answers `"ok": false`.
    pub async fn post_message(
        &self,
        channel: &str,
        text: &str,
        blocks: &[Block],
    ) -> Result<(), SlackError> {
        let response = self
            .client
            .post(self.post_message_url.clone())
            .bearer_auth(&self.access_token)
            .json(&PostMessageRequest {
                channel,
                text,
                blocks,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SlackError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        // A 2xx body that is not the usual envelope is treated as an API error
        // rather than a silent success.
        let parsed: PostMessageResponse = serde_json::from_str(&body)
            .map_err(|e| SlackError::Api(format!("unreadable response: {e}")))?;
        if !parsed.ok {
            return Err(SlackError::Api(
                parsed.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }

        tracing::debug!(channel, blocks = blocks.len(), "posted Slack message");
        Ok(())
    }
}
