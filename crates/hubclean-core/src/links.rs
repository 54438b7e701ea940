//! Deep links into the HubSpot web app.

const HUBSPOT_APP_URL: &str = "https://app.hubspot.com";

/// Link to a single contact record.
#[must_use]
pub fn contact_url(portal_id: &str, contact_id: &str) -> String {
    format!("{HUBSPOT_APP_URL}/contacts/{portal_id}/contact/{contact_id}")
}

/// Link to the contacts recycling bin, where archived contacts can be restored.
#[must_use]
pub fn restore_contacts_url(portal_id: &str) -> String {
    format!("{HUBSPOT_APP_URL}/recycling-bin/{portal_id}/restore/0-1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_url_embeds_portal_and_contact() {
        assert_eq!(
            contact_url("123456", "42"),
            "https://app.hubspot.com/contacts/123456/contact/42"
        );
    }

    #[test]
    fn contact_url_passes_ids_through_verbatim() {
        assert_eq!(
            contact_url("", "abc"),
            "https://app.hubspot.com/contacts//contact/abc"
        );
    }

    #[test]
    fn restore_contacts_url_targets_recycling_bin() {
        assert_eq!(
            restore_contacts_url("123456"),
            "https://app.hubspot.com/recycling-bin/123456/restore/0-1"
        );
    }
}
