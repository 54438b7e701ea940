//! Account metadata lookup.
//!
//! A direct `GET /account-info/v3/details`, independent of the contacts
//! listing. The body is returned unparsed; decoding happens separately in
//! [`portal_id_from_account_details`].

use hubclean_core::AccountDetails;
use reqwest::{Client, Url};

use crate::error::FetchError;

/// Fetches the raw account details body.
///
/// Resolves with the body verbatim for any 2xx status. No retries.
///
/// # Errors
///
/// - [`FetchError::AccountDetailsStatus`] for a non-2xx status, carrying the
///   status code and raw body.
/// - [`FetchError::AccountDetails`] if the connection fails or the body
///   cannot be read.
pub async fn fetch_account_details(
    client: &Client,
    url: &Url,
    access_token: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(url.clone())
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(access_token)
        .send()
        .await
        .map_err(FetchError::AccountDetails)?;

    let status = response.status();
    let body = response.text().await.map_err(FetchError::AccountDetails)?;

    if status.is_success() {
        tracing::debug!(status = status.as_u16(), "fetched HubSpot account details");
        Ok(body)
    } else {
        Err(FetchError::AccountDetailsStatus {
            status: status.as_u16(),
            body,
        })
    }
}

/// Decodes an account details body and extracts the portal id.
///
/// # Errors
///
/// - [`FetchError::AccountDetailsDecode`] if `body` is not valid JSON.
/// - [`FetchError::MissingPortalId`] if the object has no usable `portalId`.
pub fn portal_id_from_account_details(body: &str) -> Result<String, FetchError> {
    let details = AccountDetails::from_json(body).map_err(FetchError::AccountDetailsDecode)?;
    details.portal_id.ok_or(FetchError::MissingPortalId)
}
