//! The subset of Slack Block Kit the report uses.
//!
//! Serialises to the wire shape directly, e.g.
//! `{"type":"section","text":{"type":"mrkdwn","text":"..."}}`.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: TextObject },
    Section { text: TextObject },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextObject {
    PlainText { text: String },
    Mrkdwn { text: String },
}

impl Block {
    #[must_use]
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header {
            text: TextObject::PlainText { text: text.into() },
        }
    }

    #[must_use]
    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Section {
            text: TextObject::Mrkdwn { text: text.into() },
        }
    }

    /// The block's text content, whatever its type.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Header { text } | Self::Section { text } => text.as_str(),
        }
    }
}

impl TextObject {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Mrkdwn { text } => text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_serialises_as_plain_text() {
        let json = serde_json::to_value(Block::header("Title")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "header", "text": {"type": "plain_text", "text": "Title"}})
        );
    }

    #[test]
    fn section_serialises_as_mrkdwn() {
        let json = serde_json::to_value(Block::markdown("*bold*")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "section", "text": {"type": "mrkdwn", "text": "*bold*"}})
        );
    }
}
