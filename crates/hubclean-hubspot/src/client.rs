//! HTTP client for the HubSpot REST API.
//!
//! Wraps `reqwest` with bearer-token auth, a fixed contact property list, and
//! cursor pagination over the CRM v3 contacts endpoint.

use std::time::Duration;

use hubclean_core::{AppConfig, RawContact};
use reqwest::{Client, Url};

use crate::account;
use crate::error::{FetchError, HubspotError};
use crate::types::ContactsPage;

/// Properties requested for every contact. Anything else the portal stores is
/// irrelevant to the audit.
const CONTACT_PROPERTIES: &str = "email,firstname,lastname,createdate,lastmodifieddate";

/// HubSpot's maximum page size for CRM list endpoints.
const CONTACTS_PAGE_SIZE: u32 = 100;

/// Maximum number of pages to follow before giving up.
/// Prevents infinite loops on cycling cursors.
pub(crate) const MAX_PAGES: usize = 1_000;

/// Client for the HubSpot REST API.
///
/// Use [`HubspotClient::from_config`] for production or
/// [`HubspotClient::with_base_url`] to point at a mock server in tests.
pub struct HubspotClient {
    client: Client,
    access_token: String,
    account_details_url: Url,
    contacts_url: Url,
}

impl HubspotClient {
    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// See [`HubspotClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, HubspotError> {
        Self::with_base_url(
            &config.hubspot_access_token,
            config.request_timeout_secs,
            &config.user_agent,
            &config.hubspot_base_url,
        )
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`HubspotError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`HubspotError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, HubspotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Exactly one trailing slash, so `join` appends instead of replacing
        // the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let invalid = |reason: String| HubspotError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason,
        };
        let base = Url::parse(&normalised).map_err(|e| invalid(e.to_string()))?;
        let account_details_url = base
            .join("account-info/v3/details")
            .map_err(|e| invalid(e.to_string()))?;
        let contacts_url = base
            .join("crm/v3/objects/contacts")
            .map_err(|e| invalid(e.to_string()))?;

        Ok(Self {
            client,
            access_token: access_token.to_owned(),
            account_details_url,
            contacts_url,
        })
    }

    /// Fetches the raw, unparsed account details body.
    ///
    /// # Errors
    ///
    /// See [`account::fetch_account_details`].
    pub async fn account_details(&self) -> Result<String, FetchError> {
        account::fetch_account_details(&self.client, &self.account_details_url, &self.access_token)
            .await
    }

    /// Fetches every contact with the given archival state, following the
    /// `paging.next.after` cursor until the last page.
    ///
    /// All-or-nothing: on any page failure, contacts from earlier pages are
    /// discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::list_contacts_page`].
    /// Returns [`HubspotError::PaginationLimit`] if the number of pages
    /// exceeds [`MAX_PAGES`].
    pub async fn list_contacts(&self, archived: bool) -> Result<Vec<RawContact>, HubspotError> {
        let mut contacts = Vec::new();
        let mut cursor: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return Err(HubspotError::PaginationLimit {
                    max_pages: MAX_PAGES,
                });
            }

            let page = self.list_contacts_page(archived, cursor.as_deref()).await?;
            let next = page.next_cursor().map(str::to_owned);
            contacts.extend(page.results);

            match next {
                Some(after) => cursor = Some(after),
                None => break,
            }
        }

        tracing::debug!(
            archived,
            pages = page_count,
            count = contacts.len(),
            "fetched HubSpot contacts"
        );
        Ok(contacts)
    }

    /// Fetches a single page of contacts.
    ///
    /// # Errors
    ///
    /// - [`HubspotError::Http`] on network failure.
    /// - [`HubspotError::UnexpectedStatus`] on a non-2xx status.
    /// - [`HubspotError::Deserialize`] if the body does not match
    ///   [`ContactsPage`].
    pub async fn list_contacts_page(
        &self,
        archived: bool,
        after: Option<&str>,
    ) -> Result<ContactsPage, HubspotError> {
        let url = self.contacts_page_url(archived, after);
        tracing::debug!(archived, after = ?after, "requesting HubSpot contacts page");

        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(HubspotError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| HubspotError::Deserialize {
            context: format!("contacts page (archived={archived}, after={after:?})"),
            source: e,
        })
    }

    /// Builds the contacts list URL with properly percent-encoded query
    /// parameters.
    fn contacts_page_url(&self, archived: bool, after: Option<&str>) -> Url {
        let mut url = self.contacts_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("limit", &CONTACTS_PAGE_SIZE.to_string());
            pairs.append_pair("archived", if archived { "true" } else { "false" });
            pairs.append_pair("properties", CONTACT_PROPERTIES);
            if let Some(after) = after {
                pairs.append_pair("after", after);
            }
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
