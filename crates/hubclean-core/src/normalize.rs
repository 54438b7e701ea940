//! Normalization from raw HubSpot contacts to [`NormalizedContact`].
//!
//! Total by construction: every input yields exactly one output, in order.
//! Missing strings fall back to [`UNKNOWN`]; missing or unparseable
//! timestamps become [`Timestamp::invalid`].

use chrono::{DateTime, Utc};

use crate::contact::{NormalizedContact, RawContact, Timestamp, UNKNOWN};

/// Normalizes a batch of raw contacts, preserving order.
///
/// `archived_mode` only decides whether `archived_at` is populated; it never
/// filters records.
#[must_use]
pub fn normalize_contacts(raw: &[RawContact], archived_mode: bool) -> Vec<NormalizedContact> {
    raw.iter()
        .map(|contact| normalize_contact(contact, archived_mode))
        .collect()
}

/// Normalizes a single raw contact.
#[must_use]
pub fn normalize_contact(raw: &RawContact, archived_mode: bool) -> NormalizedContact {
    let props = &raw.properties;

    let archived_at =
        (archived_mode && raw.archived).then(|| parse_timestamp(raw.archived_at.as_deref()));

    NormalizedContact {
        id: raw.id.clone(),
        email: or_unknown(props.email.as_deref()),
        first_name: or_unknown(props.firstname.as_deref()),
        last_name: or_unknown(props.lastname.as_deref()),
        created_at: parse_timestamp(props.createdate.as_deref()),
        last_modified_at: parse_timestamp(props.lastmodifieddate.as_deref()),
        archived: raw.archived,
        archived_at,
    }
}

/// Parses a HubSpot timestamp.
///
/// Accepts RFC 3339 (`2020-06-20T14:30:58.364Z`) and epoch milliseconds
/// (`1592663458364`, as the legacy contact API sends them). Anything else,
/// including `None`, is an invalid timestamp.
#[must_use]
pub fn parse_timestamp(raw: Option<&str>) -> Timestamp {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Timestamp::invalid();
    };

    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Timestamp::valid(at.with_timezone(&Utc));
    }

    if raw.bytes().all(|b| b.is_ascii_digit()) {
        if let Some(at) = raw
            .parse::<i64>()
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
        {
            return Timestamp::valid(at);
        }
    }

    Timestamp::invalid()
}

// Empty strings are treated the same as absent ones.
fn or_unknown(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN)
        .to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
