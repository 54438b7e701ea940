//! Slack side of the contact audit: Block Kit rendering and delivery.

pub mod blocks;
pub mod chat;
pub mod client;
pub mod error;
pub mod report;

pub use blocks::{Block, TextObject};
pub use chat::{send_report, ChatClient};
pub use client::SlackClient;
pub use error::{DispatchError, SlackError};
pub use report::{generate_report_blocks, REPORT_SUMMARY_TEXT};
