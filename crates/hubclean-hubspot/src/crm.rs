//! The CRM collaborator seam and the contact fetch stage built on it.

use async_trait::async_trait;
use hubclean_core::RawContact;

use crate::client::HubspotClient;
use crate::error::{FetchError, HubspotError};

/// Everything the pipeline needs from the CRM.
#[async_trait]
pub trait CrmClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All contacts with the given archival state. Pagination is the
    /// implementor's concern.
    async fn fetch_all_contacts(&self, archived: bool) -> Result<Vec<RawContact>, Self::Error>;

    /// Raw JSON body of the account details endpoint.
    ///
    /// Takes no token: implementors authenticate with the access token they
    /// were built with. [`HubspotClient`] sends it as `Authorization: Bearer`.
    async fn fetch_account_details(&self) -> Result<String, FetchError>;
}

#[async_trait]
impl CrmClient for HubspotClient {
    type Error = HubspotError;

    async fn fetch_all_contacts(&self, archived: bool) -> Result<Vec<RawContact>, HubspotError> {
        self.list_contacts(archived).await
    }

    async fn fetch_account_details(&self) -> Result<String, FetchError> {
        self.account_details().await
    }
}

/// Fetches all contacts with the given archival state, as-is.
///
/// # Errors
///
/// Returns [`FetchError::Contacts`] wrapping whatever the collaborator failed
/// with.
pub async fn get_contacts<C>(crm: &C, archived: bool) -> Result<Vec<RawContact>, FetchError>
where
    C: CrmClient + ?Sized,
{
    crm.fetch_all_contacts(archived)
        .await
        .map_err(|e| FetchError::Contacts(Box::new(e)))
}
