//! Audit command handlers for the CLI.
//!
//! Both commands read `now` from the system clock once and share it across
//! the whole run.

use hubclean_core::{AppConfig, Clock, SystemClock};
use hubclean_hubspot::HubspotClient;
use hubclean_pipeline::{build_report, run_analysis, Report};
use hubclean_slack::SlackClient;

/// Run the audit once and post the report.
///
/// `channel_override` replaces the configured channel; a leading `#` is
/// accepted either way.
///
/// # Errors
///
/// Returns an error if a client cannot be constructed or any pipeline stage
/// fails. Nothing is posted in the latter case.
pub(crate) async fn run_analyze(
    config: &AppConfig,
    channel_override: Option<&str>,
) -> anyhow::Result<()> {
    let hubspot = HubspotClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build HubSpot client: {e}"))?;
    let slack = SlackClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build Slack client: {e}"))?;
    let channel = channel_override.unwrap_or(&config.slack_channel);

    let report = run_analysis(&hubspot, &slack, channel, SystemClock.now()).await?;

    println!(
        "posted report for portal {} to #{}: {} missing values, {} outdated, {} unlikely",
        report.portal_id,
        channel.trim_start_matches('#'),
        report.missing_values.len(),
        report.outdated_data.len(),
        report.unlikely_data.len(),
    );
    Ok(())
}

/// Run fetch, classify, and format, then print the blocks instead of posting.
///
/// # Errors
///
/// Returns an error if the HubSpot client cannot be constructed or a fetch
/// stage fails.
pub(crate) async fn run_preview(config: &AppConfig, pretty: bool) -> anyhow::Result<()> {
    let hubspot = HubspotClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build HubSpot client: {e}"))?;

    let report = build_report(&hubspot, SystemClock.now()).await?;
    tracing::info!(
        active = report.active_count,
        archived = report.archived_count,
        "built preview report"
    );

    println!("{}", render_blocks(&report, pretty)?);
    Ok(())
}

fn render_blocks(report: &Report, pretty: bool) -> serde_json::Result<String> {
    let blocks = report.blocks();
    if pretty {
        serde_json::to_string_pretty(&blocks)
    } else {
        serde_json::to_string(&blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(unlikely: Vec<String>) -> Report {
        Report {
            portal_id: "123456".to_string(),
            missing_values: vec!["https://app.hubspot.com/contacts/123456/contact/2".to_string()],
            outdated_data: vec![],
            unlikely_data: unlikely,
            active_count: 2,
            archived_count: 1,
        }
    }

    #[test]
    fn render_blocks_emits_block_kit_array() {
        let json = render_blocks(&report(vec![]), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let blocks = value.as_array().expect("array of blocks");
        assert_eq!(blocks.len(), 7);
        assert_eq!(blocks[0]["type"], "header");
        assert_eq!(blocks[0]["text"]["type"], "plain_text");
        assert_eq!(blocks[1]["type"], "section");
        assert_eq!(blocks[1]["text"]["type"], "mrkdwn");
        assert_eq!(
            blocks[2]["text"]["text"],
            "https://app.hubspot.com/contacts/123456/contact/2"
        );
        assert_eq!(blocks[4]["text"]["text"], "None");
    }

    #[test]
    fn render_blocks_includes_restore_link_for_unlikely_data() {
        let line = "First name: Test, Last name: Contact, Email: t@example.com".to_string();
        let json = render_blocks(&report(vec![line]), true).unwrap();

        assert!(json.contains('\n'));
        assert!(json.contains("https://app.hubspot.com/recycling-bin/123456/restore/0-1"));
    }
}
