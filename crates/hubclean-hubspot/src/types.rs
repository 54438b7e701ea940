//! HubSpot CRM v3 list response types.
//!
//! `GET /crm/v3/objects/contacts` returns
//! `{"results": [...], "paging": {"next": {"after": "<cursor>"}}}`.
//! `paging` is omitted on the last page.

use hubclean_core::RawContact;
use serde::Deserialize;

/// One page of contacts.
#[derive(Debug, Deserialize)]
pub struct ContactsPage {
    #[serde(default)]
    pub results: Vec<RawContact>,
    #[serde(default)]
    pub paging: Option<Paging>,
}

impl ContactsPage {
    /// Cursor for the following page, if there is one.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str> {
        self.paging
            .as_ref()
            .and_then(|p| p.next.as_ref())
            .map(|n| n.after.as_str())
            .filter(|after| !after.is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct Paging {
    #[serde(default)]
    pub next: Option<NextPage>,
}

#[derive(Debug, Deserialize)]
pub struct NextPage {
    pub after: String,
}
