//! The chat collaborator seam and the dispatch stage built on it.

use async_trait::async_trait;

use crate::blocks::Block;
use crate::client::SlackClient;
use crate::error::{DispatchError, SlackError};
use crate::report::REPORT_SUMMARY_TEXT;

#[async_trait]
pub trait ChatClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        blocks: &[Block],
    ) -> Result<(), Self::Error>;
}

#[async_trait]
impl ChatClient for SlackClient {
    type Error = SlackError;

    async fn post_message(
        &self,
        channel: &str,
        text: &str,
        blocks: &[Block],
    ) -> Result<(), SlackError> {
        SlackClient::post_message(self, channel, text, blocks).await
    }
}

/// Posts the report to `#<channel>` with the fixed summary text.
///
/// The post either succeeds or fails as a whole. No retries.
///
/// # Errors
///
/// Returns [`DispatchError`] wrapping whatever the collaborator failed with.
pub async fn send_report<S>(chat: &S, channel: &str, blocks: &[Block]) -> Result<(), DispatchError>
where
    S: ChatClient + ?Sized,
{
    let channel = format!("#{}", channel.trim_start_matches('#'));
    chat.post_message(&channel, REPORT_SUMMARY_TEXT, blocks)
        .await
        .map_err(|e| DispatchError(Box::new(e)))
}
