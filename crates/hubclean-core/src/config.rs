use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation are decoupled from the real environment so they can
/// be tested with a plain `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::{IpAddr, SocketAddr};

    // An empty token or channel is as good as none at all.
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let hubspot_access_token = require("HUBSPOT_ACCESS_TOKEN")?;
    let slack_access_token = require("SLACK_ACCESS_TOKEN")?;
    let slack_channel = require("SLACK_CHANNEL")?
        .trim_start_matches('#')
        .to_string();

    let port = or_default("PORT", "3000")
        .parse::<u16>()
        .map_err(|e| invalid("PORT", e.to_string()))?;
    let host = or_default("HUBCLEAN_BIND_HOST", "0.0.0.0")
        .parse::<IpAddr>()
        .map_err(|e| invalid("HUBCLEAN_BIND_HOST", e.to_string()))?;
    let bind_addr = SocketAddr::new(host, port);

    let log_level = or_default("HUBCLEAN_LOG_LEVEL", "info");
    let request_timeout_secs = or_default("HUBCLEAN_REQUEST_TIMEOUT_SECS", "30")
        .parse::<u64>()
        .map_err(|e| invalid("HUBCLEAN_REQUEST_TIMEOUT_SECS", e.to_string()))?;
    if request_timeout_secs == 0 {
        return Err(invalid(
            "HUBCLEAN_REQUEST_TIMEOUT_SECS",
            "must be greater than zero".to_string(),
        ));
    }

    let user_agent = or_default("HUBCLEAN_USER_AGENT", "hubclean/0.1 (contact-audit)");
    let hubspot_base_url = or_default("HUBSPOT_API_BASE_URL", "https://api.hubapi.com");
    let slack_base_url = or_default("SLACK_API_BASE_URL", "https://slack.com/api");

    Ok(AppConfig {
        hubspot_access_token,
        slack_access_token,
        slack_channel,
        bind_addr,
        log_level,
        request_timeout_secs,
        user_agent,
        hubspot_base_url,
        slack_base_url,
    })
}
