//! HubSpot side of the contact audit.
//!
//! [`HubspotClient`] talks to the HubSpot REST API. The [`CrmClient`] trait is
//! the seam the pipeline depends on, and [`get_contacts`] /
//! [`fetch_account_details`] wrap collaborator failures into a stage-prefixed
//! [`FetchError`].

pub mod account;
pub mod client;
pub mod crm;
pub mod error;
pub mod types;

pub use account::{fetch_account_details, portal_id_from_account_details};
pub use client::HubspotClient;
pub use crm::{get_contacts, CrmClient};
pub use error::{FetchError, HubspotError};
pub use types::{ContactsPage, Paging};
