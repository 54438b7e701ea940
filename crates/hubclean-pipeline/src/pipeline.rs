//! Audit pipeline orchestration.

use chrono::{DateTime, Utc};
use hubclean_core::{classify, contact_url, normalize_contacts, NormalizedContact};
use hubclean_hubspot::{get_contacts, portal_id_from_account_details, CrmClient};
use hubclean_slack::{generate_report_blocks, send_report, Block, ChatClient};

use crate::error::PipelineError;

/// What one run found, already rendered to presentation strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub portal_id: String,
    /// Deep links to active contacts missing an email or name.
    pub missing_values: Vec<String>,
    /// Deep links to active contacts untouched for three years.
    pub outdated_data: Vec<String>,
    /// One summary line per archived contact modified in the last three weeks.
    pub unlikely_data: Vec<String>,
    pub active_count: usize,
    pub archived_count: usize,
}

impl Report {
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        generate_report_blocks(
            &self.missing_values,
            &self.outdated_data,
            &self.unlikely_data,
            &self.portal_id,
        )
    }
}

/// Fetches, normalizes, and classifies, without posting anything.
///
/// 1. Fetch active contacts, archived contacts, and account details
///    concurrently. The first failure wins and the rest are dropped.
/// 2. Normalize active contacts plainly and archived ones in archived mode.
/// 3. Decode the portal id from the account details.
/// 4. Classify missing/outdated over the active set, unlikely over the
///    archived set, all against the same `now`.
/// 5. Render contact links and summary lines.
///
/// # Errors
///
/// Returns [`PipelineError::Fetch`] for any fetch or decode failure.
pub async fn build_report<C>(crm: &C, now: DateTime<Utc>) -> Result<Report, PipelineError>
where
    C: CrmClient + ?Sized,
{
    let (active_raw, archived_raw, account_body) = tokio::try_join!(
        get_contacts(crm, false),
        get_contacts(crm, true),
        crm.fetch_account_details(),
    )?;

    tracing::info!(
        active = active_raw.len(),
        archived = archived_raw.len(),
        "fetched HubSpot contacts"
    );

    let active = normalize_contacts(&active_raw, false);
    let archived = normalize_contacts(&archived_raw, true);
    let portal_id = portal_id_from_account_details(&account_body)?;

    let found = classify(&active, &archived, now);
    tracing::info!(
        missing_values = found.missing_values.len(),
        outdated_data = found.outdated_data.len(),
        unlikely_data = found.unlikely_data.len(),
        "classified contacts"
    );

    let link = |contacts: &[&NormalizedContact]| -> Vec<String> {
        contacts
            .iter()
            .map(|c| contact_url(&portal_id, &c.id))
            .collect()
    };

    Ok(Report {
        missing_values: link(&found.missing_values),
        outdated_data: link(&found.outdated_data),
        unlikely_data: found
            .unlikely_data
            .iter()
            .map(|c| c.summary_line())
            .collect(),
        active_count: active.len(),
        archived_count: archived.len(),
        portal_id,
    })
}

/// Runs the whole pipeline and posts the report to `channel`.
///
/// Nothing is posted unless every earlier step succeeded.
///
/// # Errors
///
/// Returns the first [`PipelineError`] encountered.
pub async fn run_analysis<C, S>(
    crm: &C,
    chat: &S,
    channel: &str,
    now: DateTime<Utc>,
) -> Result<Report, PipelineError>
where
    C: CrmClient + ?Sized,
    S: ChatClient + ?Sized,
{
    let report = build_report(crm, now).await?;
    send_report(chat, channel, &report.blocks()).await?;
    tracing::info!(channel, "sent contact audit report");
    Ok(report)
}
