//! HubSpot contact shapes, raw and normalized.
//!
//! ## Observed shape of `GET /crm/v3/objects/contacts`
//!
//! ```json
//! {
//!   "id": "1",
//!   "properties": {
//!     "createdate": "2020-06-20T14:30:53.618Z",
//!     "email": "someone@example.com",
//!     "firstname": "Some",
//!     "lastmodifieddate": "2020-06-20T14:30:58.364Z",
//!     "lastname": "One"
//!   },
//!   "createdAt": "2020-06-20T14:30:53.618Z",
//!   "updatedAt": "2020-06-20T14:30:58.364Z",
//!   "archived": false
//! }
//! ```
//!
//! Any property may be missing or `null`. Archived contacts additionally carry
//! `archivedAt`. Unknown fields are ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder substituted for a missing email, first name, or last name.
pub const UNKNOWN: &str = "Unknown";

/// A contact exactly as the CRM returned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContact {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub properties: ContactProperties,
    #[serde(default, deserialize_with = "null_as_default")]
    pub archived: bool,
    #[serde(default)]
    pub archived_at: Option<String>,
}

/// The property bag requested from HubSpot. Every field is nullable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactProperties {
    pub email: Option<String>,
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub createdate: Option<String>,
    pub lastmodifieddate: Option<String>,
}

/// A point in time parsed from a CRM timestamp string.
///
/// Absent or unparseable source values become an *invalid* timestamp rather
/// than an error or a default. An invalid timestamp is neither before nor
/// after any instant, so it never satisfies a time-threshold predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timestamp(Option<DateTime<Utc>>);

impl Timestamp {
    #[must_use]
    pub fn valid(at: DateTime<Utc>) -> Self {
        Self(Some(at))
    }

    #[must_use]
    pub fn invalid() -> Self {
        Self(None)
    }

    /// Strictly earlier than `other`. Always `false` for an invalid timestamp.
    #[must_use]
    pub fn is_before(&self, other: DateTime<Utc>) -> bool {
        self.0.is_some_and(|at| at < other)
    }

    /// Strictly later than `other`. Always `false` for an invalid timestamp.
    #[must_use]
    pub fn is_after(&self, other: DateTime<Utc>) -> bool {
        self.0.is_some_and(|at| at > other)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self::valid(at)
    }
}

/// A contact after cleaning: string fields defaulted, timestamps parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedContact {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: Timestamp,
    pub last_modified_at: Timestamp,
    pub archived: bool,
    /// Only populated for archived contacts normalized in archived mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<Timestamp>,
}

impl NormalizedContact {
    /// `true` if email, first name, or last name fell back to [`UNKNOWN`].
    #[must_use]
    pub fn has_missing_values(&self) -> bool {
        [&self.email, &self.first_name, &self.last_name]
            .iter()
            .any(|v| v.is_empty() || v.as_str() == UNKNOWN)
    }

    /// One-line human summary used in the unlikely-data report section.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "First name: {}, Last name: {}, Email: {}",
            self.first_name, self.last_name, self.email
        )
    }
}

/// Account metadata from `GET /account-info/v3/details`.
///
/// Only the portal id is read; every other field is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    /// HubSpot sends this as a JSON integer; strings are accepted too.
    #[serde(default, deserialize_with = "portal_id_as_string")]
    pub portal_id: Option<String>,
}

impl AccountDetails {
    /// Decodes the raw response body of the account details endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if `body` is not a JSON object or the
    /// portal id is neither an integer nor a string.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn portal_id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_json::Value;

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match (n.as_u64(), n.as_i64()) {
            (Some(id), _) => Ok(Some(id.to_string())),
            (None, Some(id)) => Ok(Some(id.to_string())),
            (None, None) => Err(D::Error::custom(format!(
                "portalId must be an integer, got {n}"
            ))),
        },
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(D::Error::custom(format!(
            "portalId must be an integer or string, got {other}"
        ))),
    }
}
