//! Domain model and decision logic for the HubSpot contact audit.
//!
//! Everything in this crate is pure: raw CRM records go in, normalized
//! contacts and quality flags come out. HTTP collaborators live in
//! `hubclean-hubspot` and `hubclean-slack`.

pub mod app_config;
pub mod classify;
pub mod clock;
pub mod config;
pub mod contact;
pub mod links;
pub mod normalize;

use thiserror::Error;

pub use app_config::AppConfig;
pub use classify::{
    classify, find_contacts_with_missing_values, find_contacts_with_outdated_data,
    find_contacts_with_unlikely_data, Classification, OUTDATED_DATA_THRESHOLD_YEARS,
    UNLIKELY_DATA_THRESHOLD_DAYS,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{load_app_config, load_app_config_from_env};
pub use contact::{
    AccountDetails, ContactProperties, NormalizedContact, RawContact, Timestamp, UNKNOWN,
};
pub use links::{contact_url, restore_contacts_url};
pub use normalize::{normalize_contact, normalize_contacts, parse_timestamp};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
