//! Data-quality predicates over normalized contacts.
//!
//! Each predicate returns the order-preserving subsequence of matching
//! contacts. The time-based predicates take the reference instant as a
//! parameter so one run can share a single `now`.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::contact::NormalizedContact;

/// Contacts untouched for longer than this are reported as outdated.
pub const OUTDATED_DATA_THRESHOLD_YEARS: u32 = 3;

/// Archived contacts modified within this window are reported as unlikely.
pub const UNLIKELY_DATA_THRESHOLD_DAYS: i64 = 21;

/// Flagged contacts, split by category. A contact may appear in more than
/// one category but never twice in the same one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification<'a> {
    pub missing_values: Vec<&'a NormalizedContact>,
    pub outdated_data: Vec<&'a NormalizedContact>,
    pub unlikely_data: Vec<&'a NormalizedContact>,
}

/// Runs all three predicates.
///
/// Missing-values and outdated-data look only at `active`; unlikely-data looks
/// only at `archived`.
#[must_use]
pub fn classify<'a>(
    active: &'a [NormalizedContact],
    archived: &'a [NormalizedContact],
    now: DateTime<Utc>,
) -> Classification<'a> {
    Classification {
        missing_values: find_contacts_with_missing_values(active),
        outdated_data: find_contacts_with_outdated_data(active, now),
        unlikely_data: find_contacts_with_unlikely_data(archived, now),
    }
}

/// Contacts whose email, first name, or last name is missing.
#[must_use]
pub fn find_contacts_with_missing_values(data: &[NormalizedContact]) -> Vec<&NormalizedContact> {
    data.iter().filter(|c| c.has_missing_values()).collect()
}

/// Contacts last modified before `now` minus [`OUTDATED_DATA_THRESHOLD_YEARS`].
#[must_use]
pub fn find_contacts_with_outdated_data(
    data: &[NormalizedContact],
    now: DateTime<Utc>,
) -> Vec<&NormalizedContact> {
    let cutoff = outdated_cutoff(now);
    data.iter()
        .filter(|c| c.last_modified_at.is_before(cutoff))
        .collect()
}

/// Archived contacts modified after `now` minus [`UNLIKELY_DATA_THRESHOLD_DAYS`].
///
/// A contact should not change after it has been archived, so a recent
/// modification on an archived record needs a restore-and-review.
#[must_use]
pub fn find_contacts_with_unlikely_data(
    data: &[NormalizedContact],
    now: DateTime<Utc>,
) -> Vec<&NormalizedContact> {
    let cutoff = unlikely_cutoff(now);
    data.iter()
        .filter(|c| c.archived && c.last_modified_at.is_after(cutoff))
        .collect()
}

/// Calendar subtraction: Feb 29 minus whole years lands on Feb 28.
#[must_use]
pub fn outdated_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(12 * OUTDATED_DATA_THRESHOLD_YEARS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[must_use]
pub fn unlikely_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now.checked_sub_signed(TimeDelta::days(UNLIKELY_DATA_THRESHOLD_DAYS))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
