//! Renders the audit results as Slack blocks.

use hubclean_core::restore_contacts_url;

use crate::blocks::Block;

const REPORT_TITLE: &str = "Bad Data Analysis Report";

/// Plain-text fallback shown in notifications and by clients without
/// Block Kit support.
pub const REPORT_SUMMARY_TEXT: &str = "Bad Data Analysis Report: Summary of contacts with missing values, outdated data, and unlikely data.";

const MISSING_VALUES_LABEL: &str =
    "*Contacts with Missing Values (missing email, first name or last name):*";
const OUTDATED_DATA_LABEL: &str =
    "*Contacts with Outdated Data (last modified more than 3 years ago):*";
const UNLIKELY_DATA_LABEL: &str =
    "*Contacts with Unlikely Data (archived but last modified less than 3 weeks ago):*";

const EMPTY_SECTION: &str = "None";

/// Builds the report: a header, then a label and a content block for each
/// category, plus a restore link when any unlikely-data contacts were found.
///
/// Content blocks list one entry per line, or `None` when empty.
#[must_use]
pub fn generate_report_blocks(
    missing_values: &[String],
    outdated_data: &[String],
    unlikely_data: &[String],
    portal_id: &str,
) -> Vec<Block> {
    let mut blocks = vec![
        Block::header(REPORT_TITLE),
        Block::markdown(MISSING_VALUES_LABEL),
        Block::markdown(section_body(missing_values)),
        Block::markdown(OUTDATED_DATA_LABEL),
        Block::markdown(section_body(outdated_data)),
        Block::markdown(UNLIKELY_DATA_LABEL),
        Block::markdown(section_body(unlikely_data)),
    ];

    if !unlikely_data.is_empty() {
        blocks.push(Block::markdown(format!(
            "You may restore archived contacts <{}|here>",
            restore_contacts_url(portal_id)
        )));
    }

    blocks
}

fn section_body(entries: &[String]) -> String {
    if entries.is_empty() {
        EMPTY_SECTION.to_string()
    } else {
        entries.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESTORE_PHRASE: &str = "You may restore archived contacts";

    #[test]
    fn empty_report_has_seven_blocks_without_restore_link() {
        let blocks = generate_report_blocks(&[], &[], &[], "123456");

        assert_eq!(blocks.len(), 7);
        let last = blocks.last().unwrap();
        assert!(!last.text().contains(RESTORE_PHRASE));
    }

    #[test]
    fn unlikely_data_adds_restore_link() {
        let blocks = generate_report_blocks(
            &[],
            &[],
            &["First name: Test, Last name: Contact, Email: test_contact@gmail.com".to_string()],
            "123456",
        );

        assert_eq!(blocks.len(), 8);
        let last = blocks.last().unwrap();
        assert!(last.text().contains(RESTORE_PHRASE));
        assert!(last.text().contains("123456"));
        assert_eq!(
            last.text(),
            "You may restore archived contacts \
             <https://app.hubspot.com/recycling-bin/123456/restore/0-1|here>"
        );
    }

    #[test]
    fn empty_sections_read_none() {
        let blocks = generate_report_blocks(&[], &[], &[], "1");
        assert_eq!(blocks[2].text(), "None");
        assert_eq!(blocks[4].text(), "None");
        assert_eq!(blocks[6].text(), "None");
    }

    #[test]
    fn sections_join_entries_with_newlines() {
        let missing = vec![
            "https://app.hubspot.com/contacts/1/contact/2".to_string(),
            "https://app.hubspot.com/contacts/1/contact/5".to_string(),
        ];
        let outdated = vec!["https://app.hubspot.com/contacts/1/contact/9".to_string()];

        let blocks = generate_report_blocks(&missing, &outdated, &[], "1");

        assert_eq!(
            blocks[2].text(),
            "https://app.hubspot.com/contacts/1/contact/2\nhttps://app.hubspot.com/contacts/1/contact/5"
        );
        assert_eq!(blocks[4].text(), "https://app.hubspot.com/contacts/1/contact/9");
    }

    #[test]
    fn layout_is_header_then_label_content_pairs() {
        let blocks = generate_report_blocks(&[], &[], &[], "1");
        assert_eq!(blocks[0], Block::header("Bad Data Analysis Report"));
        assert_eq!(blocks[1].text(), MISSING_VALUES_LABEL);
        assert_eq!(blocks[3].text(), OUTDATED_DATA_LABEL);
        assert_eq!(blocks[5].text(), UNLIKELY_DATA_LABEL);
    }
}
